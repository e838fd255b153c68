//! The explicit start-up phase that assembles the catalog.

use arm_resourceids::{recaser, Recaser};
use arm_state::StateVersionRegistry;
use tracing::info;

use crate::error::BootstrapError;
use crate::ids;
use crate::migration;

/// The identifier registry and state upgrade chains of every managed resource.
///
/// Immutable once built; share it by reference across threads.
#[derive(Debug)]
pub struct Catalog {
    recaser: Recaser,
    upgrades: StateVersionRegistry,
}

impl Catalog {
    /// Returns the identifier registry.
    pub fn recaser(&self) -> &Recaser {
        &self.recaser
    }

    /// Returns the state upgrade chains.
    pub fn upgrades(&self) -> &StateVersionRegistry {
        &self.upgrades
    }

    /// Splits the catalog into its parts.
    pub fn into_parts(self) -> (Recaser, StateVersionRegistry) {
        (self.recaser, self.upgrades)
    }
}

/// Registers every grammar and upgrade chain.
///
/// Fails if two grammars disagree on the casing of a shared literal or if a
/// chain is not contiguous from version 0.
pub fn bootstrap() -> Result<Catalog, BootstrapError> {
    let mut builder = Recaser::builder();
    builder.register_all(ids::ALL.iter().copied())?;
    let recaser = builder.build();

    let mut upgrades = StateVersionRegistry::new();
    for chain in migration::all_chains()? {
        upgrades.register(chain)?;
    }

    info!(
        id_kinds = recaser.len(),
        resources = upgrades.resources().count(),
        "bootstrapped resource catalog"
    );
    Ok(Catalog { recaser, upgrades })
}

/// Bootstraps the catalog and installs its recaser process-wide.
///
/// Returns the upgrade chains; the recaser is then reachable through
/// [`recaser::global`]. Fails if a recaser was already installed.
pub fn bootstrap_global() -> Result<StateVersionRegistry, BootstrapError> {
    let (recaser, upgrades) = bootstrap()?.into_parts();
    recaser::install(recaser)?;
    Ok(upgrades)
}
