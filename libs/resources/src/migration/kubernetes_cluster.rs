//! Upgrades for `kubernetes_cluster` state.
//!
//! - v0 → v1: the ID was stored with whatever casing the API returned.
//! - v1 → v2: Azure AD settings moved out of `role_based_access_control`
//!   into their own block. The API never returns `server_app_secret`, so the
//!   value held in state is the only copy and has to be carried across.

use arm_state::ids::normalize_id;
use arm_state::value::{first_block, get_str, set_single_block};
use arm_state::{
    ChainError, FieldKind, StateMap, StateSchema, StateUpgrade, StepError, UpgradeChain, Value,
};
use tracing::debug;

use crate::ids::KubernetesClusterId;

pub const RESOURCE: &str = "kubernetes_cluster";

const RBAC: &str = "role_based_access_control";
const AAD: &str = "azure_active_directory";
const AAD_RBAC: &str = "azure_active_directory_role_based_access_control";
const SERVER_APP_SECRET: &str = "server_app_secret";

/// Re-cases the cluster ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct KubernetesClusterV0ToV1;

impl StateUpgrade for KubernetesClusterV0ToV1 {
    fn schema(&self) -> StateSchema {
        base_schema()
    }

    fn upgrade(&self, mut state: StateMap) -> Result<StateMap, StepError> {
        debug!("migrating ID to canonical casing for Kubernetes cluster");
        normalize_id::<KubernetesClusterId>(&mut state, "id")?;
        Ok(state)
    }

    fn name(&self) -> &'static str {
        "KubernetesClusterV0ToV1"
    }
}

/// Copies `server_app_secret` into the dedicated Azure AD RBAC block.
#[derive(Debug, Clone, Copy, Default)]
pub struct KubernetesClusterV1ToV2;

impl StateUpgrade for KubernetesClusterV1ToV2 {
    fn schema(&self) -> StateSchema {
        base_schema()
    }

    fn upgrade(&self, mut state: StateMap) -> Result<StateMap, StepError> {
        let secret = match first_block(&state, RBAC)? {
            Some(rbac) => match first_block(rbac, AAD)? {
                Some(aad) => get_str(aad, SERVER_APP_SECRET)?.unwrap_or_default().to_string(),
                None => String::new(),
            },
            None => String::new(),
        };

        if secret.is_empty() {
            return Ok(state);
        }

        debug!(
            from = "role_based_access_control.0.azure_active_directory.0.server_app_secret",
            to = "azure_active_directory_role_based_access_control.0.server_app_secret",
            "copying server app secret"
        );
        let mut block = StateMap::new();
        block.insert(SERVER_APP_SECRET.to_string(), Value::String(secret));
        set_single_block(&mut state, AAD_RBAC, block);
        Ok(state)
    }

    fn name(&self) -> &'static str {
        "KubernetesClusterV1ToV2"
    }
}

/// Builds the `kubernetes_cluster` chain.
pub fn chain() -> Result<UpgradeChain, ChainError> {
    UpgradeChain::builder(RESOURCE)
        .step(0, KubernetesClusterV0ToV1)
        .step(1, KubernetesClusterV1ToV2)
        .build()
}

fn base_schema() -> StateSchema {
    StateSchema::new()
        .required("id", FieldKind::String)
        .required("name", FieldKind::String)
        .required("location", FieldKind::String)
        .required("resource_group_name", FieldKind::String)
        .optional("dns_prefix", FieldKind::String)
        .optional("kubernetes_version", FieldKind::String)
        .optional("tags", FieldKind::Map)
        .optional(
            "default_node_pool",
            FieldKind::Block(
                StateSchema::new()
                    .required("name", FieldKind::String)
                    .required("vm_size", FieldKind::String)
                    .optional("node_count", FieldKind::Int)
                    .optional("zones", FieldKind::Set(Box::new(FieldKind::String))),
            ),
        )
        .optional(
            RBAC,
            FieldKind::Block(
                StateSchema::new()
                    .required("enabled", FieldKind::Bool)
                    .optional(
                        AAD,
                        FieldKind::Block(
                            StateSchema::new()
                                .optional("client_app_id", FieldKind::String)
                                .optional("server_app_id", FieldKind::String)
                                .optional(SERVER_APP_SECRET, FieldKind::String)
                                .optional("tenant_id", FieldKind::String)
                                .optional("managed", FieldKind::Bool)
                                .optional(
                                    "admin_group_object_ids",
                                    FieldKind::Set(Box::new(FieldKind::String)),
                                ),
                        ),
                    ),
            ),
        )
}
