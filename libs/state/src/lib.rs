//! # arm-state
//!
//! Persisted resource state and the ordered pipeline that upgrades it from
//! the schema version it was written with to the current one.
//!
//! ## Design Principles
//!
//! - State is a dynamically-typed mapping; each step decodes only the fields
//!   it cares about, so no global schema leaks out of the migration boundary
//! - Steps for a resource form a contiguous chain starting at version 0,
//!   checked when the chain is built
//! - The pipeline never runs backwards and never hands back a partially
//!   upgraded state: the caller gets the fully upgraded state or an error,
//!   and their input is left untouched either way
//! - Nothing here touches storage; loading and saving state is the caller's job
//!
//! ## Example
//!
//! ```ignore
//! let chain = UpgradeChain::builder("kubernetes_cluster")
//!     .step(0, KubernetesClusterV0ToV1)
//!     .step(1, KubernetesClusterV1ToV2)
//!     .build()?;
//!
//! let upgraded = chain.upgrade(&stored_state, stored_version)?;
//! save(upgraded.state, upgraded.version);
//! ```

mod chain;
mod error;
pub mod ids;
mod pipeline;
mod registry;
mod shape;
mod upgrade;
pub mod value;

pub use chain::{UpgradeChain, UpgradeChainBuilder};
pub use error::{ChainError, MigrationError, ShapeViolation, StepError};
pub use pipeline::{upgrade, UpgradedState};
pub use registry::StateVersionRegistry;
pub use shape::{FieldKind, FieldSchema, StateSchema};
pub use upgrade::{upgrade_fn, FnUpgrade, StateUpgrade};
pub use value::StateMap;

/// Re-export of the dynamic value type state is made of.
pub use serde_json::Value;
