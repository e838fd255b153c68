//! Upgrades for `redis_cache` state.

use arm_state::ids::normalize_id;
use arm_state::{ChainError, FieldKind, StateMap, StateSchema, StateUpgrade, StepError, UpgradeChain};

use crate::ids::RedisCacheId;

pub const RESOURCE: &str = "redis_cache";

/// Re-cases the cache ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedisCacheV0ToV1;

impl StateUpgrade for RedisCacheV0ToV1 {
    fn schema(&self) -> StateSchema {
        StateSchema::new()
            .required("id", FieldKind::String)
            .required("name", FieldKind::String)
            .required("location", FieldKind::String)
            .required("resource_group_name", FieldKind::String)
            .required("capacity", FieldKind::Int)
            .required("family", FieldKind::String)
            .required("sku_name", FieldKind::String)
            .optional("subnet_id", FieldKind::String)
            .optional("minimum_tls_version", FieldKind::String)
            .optional(
                "redis_configuration",
                FieldKind::Block(
                    StateSchema::new()
                        .optional("maxmemory_policy", FieldKind::String)
                        .optional("rdb_backup_enabled", FieldKind::Bool),
                ),
            )
            .optional("zones", FieldKind::Set(Box::new(FieldKind::String)))
            .optional("tags", FieldKind::Map)
    }

    fn upgrade(&self, mut state: StateMap) -> Result<StateMap, StepError> {
        normalize_id::<RedisCacheId>(&mut state, "id")?;
        Ok(state)
    }

    fn name(&self) -> &'static str {
        "RedisCacheV0ToV1"
    }
}

/// Builds the `redis_cache` chain.
pub fn chain() -> Result<UpgradeChain, ChainError> {
    UpgradeChain::builder(RESOURCE)
        .step(0, RedisCacheV0ToV1)
        .build()
}
