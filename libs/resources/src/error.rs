//! Errors raised while bootstrapping the catalog.

use arm_resourceids::RegistryError;
use arm_state::ChainError;
use thiserror::Error;

/// A start-up failure. These indicate a programming error in the catalog
/// itself, never bad input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// An ID grammar could not be registered.
    #[error("registering resource ID grammars: {0}")]
    Registry(#[from] RegistryError),

    /// An upgrade chain is malformed or registered twice.
    #[error("registering state upgrade chains: {0}")]
    Chain(#[from] ChainError),
}
