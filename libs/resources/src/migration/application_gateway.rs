//! Upgrades for `application_gateway` state.

use arm_state::ids::normalize_optional_id;
use arm_state::{ChainError, FieldKind, StateMap, StateSchema, StateUpgrade, StepError, UpgradeChain};
use tracing::debug;

use crate::ids::ApplicationGatewayId;

pub const RESOURCE: &str = "application_gateway";

/// Re-cases the gateway ID.
///
/// Gateways that were never created have an empty ID, which is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicationGatewayV0ToV1;

impl StateUpgrade for ApplicationGatewayV0ToV1 {
    fn schema(&self) -> StateSchema {
        let named = || StateSchema::new().required("name", FieldKind::String);
        StateSchema::new()
            .required("id", FieldKind::String)
            .required("name", FieldKind::String)
            .required("resource_group_name", FieldKind::String)
            .required("location", FieldKind::String)
            .optional(
                "sku",
                FieldKind::Block(
                    StateSchema::new()
                        .required("name", FieldKind::String)
                        .required("tier", FieldKind::String)
                        .optional("capacity", FieldKind::Int),
                ),
            )
            .optional("backend_address_pool", FieldKind::Block(named()))
            .optional("backend_http_settings", FieldKind::Block(named()))
            .optional("frontend_port", FieldKind::Block(named().optional("port", FieldKind::Int)))
            .optional("http_listener", FieldKind::Block(named()))
            .optional("request_routing_rule", FieldKind::Block(named()))
            .optional("zones", FieldKind::Set(Box::new(FieldKind::String)))
            .optional("tags", FieldKind::Map)
    }

    fn upgrade(&self, mut state: StateMap) -> Result<StateMap, StepError> {
        debug!("migrating application gateway ID to canonical casing");
        normalize_optional_id::<ApplicationGatewayId>(&mut state, "id")?;
        Ok(state)
    }

    fn name(&self) -> &'static str {
        "ApplicationGatewayV0ToV1"
    }
}

/// Builds the `application_gateway` chain.
pub fn chain() -> Result<UpgradeChain, ChainError> {
    UpgradeChain::builder(RESOURCE)
        .step(0, ApplicationGatewayV0ToV1)
        .build()
}
