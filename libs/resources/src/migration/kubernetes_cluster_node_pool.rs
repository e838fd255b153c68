//! Upgrades for `kubernetes_cluster_node_pool` state.

use arm_state::ids::normalize_id;
use arm_state::{ChainError, FieldKind, StateMap, StateSchema, StateUpgrade, StepError, UpgradeChain};

use crate::ids::AgentPoolId;

pub const RESOURCE: &str = "kubernetes_cluster_node_pool";

/// Re-cases the node pool ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct KubernetesClusterNodePoolV0ToV1;

impl StateUpgrade for KubernetesClusterNodePoolV0ToV1 {
    fn schema(&self) -> StateSchema {
        StateSchema::new()
            .required("id", FieldKind::String)
            .required("name", FieldKind::String)
            .required("kubernetes_cluster_id", FieldKind::String)
            .required("vm_size", FieldKind::String)
            .optional("node_count", FieldKind::Int)
            .optional("mode", FieldKind::String)
            .optional("zones", FieldKind::Set(Box::new(FieldKind::String)))
            .optional("node_labels", FieldKind::Map)
            .optional("tags", FieldKind::Map)
    }

    fn upgrade(&self, mut state: StateMap) -> Result<StateMap, StepError> {
        normalize_id::<AgentPoolId>(&mut state, "id")?;
        Ok(state)
    }

    fn name(&self) -> &'static str {
        "KubernetesClusterNodePoolV0ToV1"
    }
}

/// Builds the `kubernetes_cluster_node_pool` chain.
pub fn chain() -> Result<UpgradeChain, ChainError> {
    UpgradeChain::builder(RESOURCE)
        .step(0, KubernetesClusterNodePoolV0ToV1)
        .build()
}
