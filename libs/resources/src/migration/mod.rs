//! State upgrade chains, one module per resource.
//!
//! Each module exposes its steps and a `chain()` assembling them in order.

pub mod app_service;
pub mod application_gateway;
pub mod kubernetes_cluster;
pub mod kubernetes_cluster_node_pool;
pub mod managed_disk;
pub mod redis_cache;

use arm_state::{ChainError, UpgradeChain};

/// Builds the upgrade chain of every managed resource.
pub fn all_chains() -> Result<Vec<UpgradeChain>, ChainError> {
    Ok(vec![
        kubernetes_cluster::chain()?,
        kubernetes_cluster_node_pool::chain()?,
        application_gateway::chain()?,
        app_service::linux_web_app_slot_chain()?,
        app_service::linux_function_app_slot_chain()?,
        managed_disk::chain()?,
        redis_cache::chain()?,
    ])
}
