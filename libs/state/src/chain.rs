//! Per-resource chains of upgrade steps.

use std::collections::BTreeMap;

use crate::error::{ChainError, MigrationError};
use crate::pipeline::{upgrade, UpgradedState};
use crate::upgrade::StateUpgrade;
use crate::value::StateMap;

/// The ordered upgrade steps for one resource kind.
///
/// Step `n` upgrades version `n` to `n + 1`; the current version is the
/// number of steps. A chain with no steps is at version 0.
pub struct UpgradeChain {
    resource: &'static str,
    steps: Vec<Box<dyn StateUpgrade>>,
}

impl std::fmt::Debug for UpgradeChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpgradeChain")
            .field("resource", &self.resource)
            .field(
                "steps",
                &self.steps.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl UpgradeChain {
    /// Starts a chain for a resource kind.
    pub fn builder(resource: &'static str) -> UpgradeChainBuilder {
        UpgradeChainBuilder {
            resource,
            steps: BTreeMap::new(),
            duplicate: None,
        }
    }

    /// Returns the resource kind.
    pub fn resource(&self) -> &'static str {
        self.resource
    }

    /// Returns the current schema version.
    pub fn current_version(&self) -> u32 {
        u32::try_from(self.steps.len()).unwrap_or(u32::MAX)
    }

    /// Returns the step from `version` to `version + 1`.
    pub fn step(&self, version: u32) -> Option<&dyn StateUpgrade> {
        self.steps.get(version as usize).map(|s| &**s)
    }

    /// Upgrades state stored at `from` to the current version.
    pub fn upgrade(&self, state: &StateMap, from: u32) -> Result<UpgradedState, MigrationError> {
        self.upgrade_to(state, from, self.current_version())
    }

    /// Upgrades state stored at `from` to version `to`.
    pub fn upgrade_to(
        &self,
        state: &StateMap,
        from: u32,
        to: u32,
    ) -> Result<UpgradedState, MigrationError> {
        upgrade(self.resource, state, from, to, &self.steps)
    }
}

/// Collects the steps of an [`UpgradeChain`].
pub struct UpgradeChainBuilder {
    resource: &'static str,
    steps: BTreeMap<u32, Box<dyn StateUpgrade>>,
    duplicate: Option<u32>,
}

impl UpgradeChainBuilder {
    /// Declares the step from `version` to `version + 1`.
    #[must_use]
    pub fn step(mut self, version: u32, step: impl StateUpgrade + 'static) -> Self {
        self.boxed_step(version, Box::new(step));
        self
    }

    /// Declares an already boxed step.
    pub fn boxed_step(&mut self, version: u32, step: Box<dyn StateUpgrade>) -> &mut Self {
        if self.steps.insert(version, step).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(version);
        }
        self
    }

    /// Builds the chain, checking that versions run 0, 1, 2, ... with no gaps.
    pub fn build(self) -> Result<UpgradeChain, ChainError> {
        if let Some(version) = self.duplicate {
            return Err(ChainError::DuplicateStep {
                resource: self.resource,
                version,
            });
        }

        let mut steps = Vec::with_capacity(self.steps.len());
        for (expected, (found, step)) in (0u32..).zip(self.steps) {
            if found != expected {
                return Err(ChainError::NonContiguous {
                    resource: self.resource,
                    expected,
                    found,
                });
            }
            steps.push(step);
        }

        Ok(UpgradeChain {
            resource: self.resource,
            steps,
        })
    }
}
