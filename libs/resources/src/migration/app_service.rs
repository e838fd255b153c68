//! Upgrades for Linux web app and function app slot state.
//!
//! Both slot kinds store an optional `service_plan_id`, set only when the
//! slot runs on a different plan from its parent app. Older versions stored
//! it with the casing the API returned.

use arm_state::ids::normalize_optional_id;
use arm_state::{ChainError, FieldKind, StateMap, StateSchema, StateUpgrade, StepError, UpgradeChain};

use crate::ids::AppServicePlanId;

pub const LINUX_WEB_APP_SLOT: &str = "linux_web_app_slot";
pub const LINUX_FUNCTION_APP_SLOT: &str = "linux_function_app_slot";

/// Re-cases `service_plan_id` on a Linux web app slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxWebAppSlotV0ToV1;

impl StateUpgrade for LinuxWebAppSlotV0ToV1 {
    fn schema(&self) -> StateSchema {
        slot_schema("app_service_id")
    }

    fn upgrade(&self, state: StateMap) -> Result<StateMap, StepError> {
        normalize_service_plan_id(state)
    }

    fn name(&self) -> &'static str {
        "LinuxWebAppSlotV0ToV1"
    }
}

/// Re-cases `service_plan_id` on a Linux function app slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxFunctionAppSlotV0ToV1;

impl StateUpgrade for LinuxFunctionAppSlotV0ToV1 {
    fn schema(&self) -> StateSchema {
        slot_schema("function_app_id")
            .optional("storage_account_name", FieldKind::String)
            .optional("functions_extension_version", FieldKind::String)
    }

    fn upgrade(&self, state: StateMap) -> Result<StateMap, StepError> {
        normalize_service_plan_id(state)
    }

    fn name(&self) -> &'static str {
        "LinuxFunctionAppSlotV0ToV1"
    }
}

/// Builds the `linux_web_app_slot` chain.
pub fn linux_web_app_slot_chain() -> Result<UpgradeChain, ChainError> {
    UpgradeChain::builder(LINUX_WEB_APP_SLOT)
        .step(0, LinuxWebAppSlotV0ToV1)
        .build()
}

/// Builds the `linux_function_app_slot` chain.
pub fn linux_function_app_slot_chain() -> Result<UpgradeChain, ChainError> {
    UpgradeChain::builder(LINUX_FUNCTION_APP_SLOT)
        .step(0, LinuxFunctionAppSlotV0ToV1)
        .build()
}

fn normalize_service_plan_id(mut state: StateMap) -> Result<StateMap, StepError> {
    normalize_optional_id::<AppServicePlanId>(&mut state, "service_plan_id")?;
    Ok(state)
}

fn slot_schema(parent_field: &'static str) -> StateSchema {
    StateSchema::new()
        .required("name", FieldKind::String)
        .required(parent_field, FieldKind::String)
        .optional("service_plan_id", FieldKind::String)
        .optional("enabled", FieldKind::Bool)
        .optional("https_only", FieldKind::Bool)
        .optional("app_settings", FieldKind::Map)
        .optional(
            "site_config",
            FieldKind::Block(
                StateSchema::new()
                    .optional("always_on", FieldKind::Bool)
                    .optional("minimum_tls_version", FieldKind::String),
            ),
        )
        .optional("tags", FieldKind::Map)
}
