//! Upgrades for `managed_disk` state.

use arm_state::ids::normalize_id;
use arm_state::{ChainError, FieldKind, StateMap, StateSchema, StateUpgrade, StepError, UpgradeChain};

use crate::ids::ManagedDiskId;

pub const RESOURCE: &str = "managed_disk";

/// Re-cases the disk ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagedDiskV0ToV1;

impl StateUpgrade for ManagedDiskV0ToV1 {
    fn schema(&self) -> StateSchema {
        StateSchema::new()
            .required("id", FieldKind::String)
            .required("name", FieldKind::String)
            .required("location", FieldKind::String)
            .required("resource_group_name", FieldKind::String)
            .required("storage_account_type", FieldKind::String)
            .required("create_option", FieldKind::String)
            .optional("disk_size_gb", FieldKind::Int)
            .optional("source_resource_id", FieldKind::String)
            .optional("zone", FieldKind::String)
            .optional("tags", FieldKind::Map)
    }

    fn upgrade(&self, mut state: StateMap) -> Result<StateMap, StepError> {
        normalize_id::<ManagedDiskId>(&mut state, "id")?;
        Ok(state)
    }

    fn name(&self) -> &'static str {
        "ManagedDiskV0ToV1"
    }
}

/// Builds the `managed_disk` chain.
pub fn chain() -> Result<UpgradeChain, ChainError> {
    UpgradeChain::builder(RESOURCE)
        .step(0, ManagedDiskV0ToV1)
        .build()
}
