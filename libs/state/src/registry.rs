//! The state version registry: one upgrade chain per resource kind.

use std::collections::BTreeMap;

use crate::chain::UpgradeChain;
use crate::error::{ChainError, MigrationError};
use crate::pipeline::UpgradedState;
use crate::value::StateMap;

/// Upgrade chains keyed by resource kind.
///
/// Built once at start-up and read-only afterwards; it is `Send + Sync`, so
/// independent resources can be upgraded in parallel against one registry.
#[derive(Debug, Default)]
pub struct StateVersionRegistry {
    chains: BTreeMap<&'static str, UpgradeChain>,
}

impl StateVersionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the chain for a resource kind.
    pub fn register(&mut self, chain: UpgradeChain) -> Result<&mut Self, ChainError> {
        let resource = chain.resource();
        if self.chains.contains_key(resource) {
            return Err(ChainError::DuplicateResource(resource));
        }
        self.chains.insert(resource, chain);
        Ok(self)
    }

    /// Returns the chain for a resource kind.
    pub fn chain(&self, resource: &str) -> Option<&UpgradeChain> {
        self.chains.get(resource)
    }

    /// Returns the current schema version of a resource kind.
    pub fn current_version(&self, resource: &str) -> Option<u32> {
        self.chain(resource).map(UpgradeChain::current_version)
    }

    /// Returns the registered resource kinds in sorted order.
    pub fn resources(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.chains.keys().copied()
    }

    /// Upgrades a resource's state from `from` to its current version.
    pub fn upgrade(
        &self,
        resource: &str,
        state: &StateMap,
        from: u32,
    ) -> Result<UpgradedState, MigrationError> {
        self.require(resource)?.upgrade(state, from)
    }

    /// Upgrades a resource's state from `from` to version `to`.
    pub fn upgrade_to(
        &self,
        resource: &str,
        state: &StateMap,
        from: u32,
        to: u32,
    ) -> Result<UpgradedState, MigrationError> {
        self.require(resource)?.upgrade_to(state, from, to)
    }

    fn require(&self, resource: &str) -> Result<&UpgradeChain, MigrationError> {
        self.chain(resource)
            .ok_or_else(|| MigrationError::UnknownResource(resource.to_string()))
    }
}
