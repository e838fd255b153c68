//! # arm-resources
//!
//! The ID kinds and state upgrade chains of the managed resources, and the
//! start-up phase that registers them.
//!
//! Call [`bootstrap`] once before serving any request; everything it returns
//! is read-only afterwards.
//!
//! ## Example
//!
//! ```ignore
//! let catalog = arm_resources::bootstrap()?;
//! let upgraded = catalog
//!     .upgrades()
//!     .upgrade("kubernetes_cluster", &stored_state, stored_version)?;
//! ```

mod catalog;
mod error;
pub mod ids;
pub mod migration;

pub use catalog::{bootstrap, bootstrap_global, Catalog};
pub use error::BootstrapError;
pub use ids::{
    AgentPoolId, AppServicePlanId, ApplicationGatewayId, KubernetesClusterId, ManagedDiskId,
    RedisCacheId, ResourceGroupId, SubnetId, SubscriptionId, WebAppSlotId,
};
