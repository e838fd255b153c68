//! Normalizing IDs held in state.
//!
//! The most common upgrade step rewrites an ID field that was persisted with
//! the casing the remote API happened to return, or in an older path shape,
//! into its canonical form: parse it insensitively, then format it.

use arm_resourceids::ResourceId;
use serde_json::Value;
use tracing::debug;

use crate::error::StepError;
use crate::value::{get_str, StateMap};

/// Rewrites a required ID field to canonical form.
pub fn normalize_id<T: ResourceId>(state: &mut StateMap, field: &str) -> Result<(), StepError> {
    let raw = get_str(state, field)?.ok_or_else(|| StepError::missing(field))?;
    let canonical = canonicalize::<T>(field, raw)?;
    set_id(state, field, canonical);
    Ok(())
}

/// Rewrites an optional ID field to canonical form.
///
/// Absent, null and empty values are left as they are.
pub fn normalize_optional_id<T: ResourceId>(
    state: &mut StateMap,
    field: &str,
) -> Result<(), StepError> {
    let Some(raw) = get_str(state, field)? else {
        return Ok(());
    };
    if raw.is_empty() {
        return Ok(());
    }
    let canonical = canonicalize::<T>(field, raw)?;
    set_id(state, field, canonical);
    Ok(())
}

/// Parses `raw` insensitively and formats it in canonical form.
pub fn canonicalize<T: ResourceId>(field: &str, raw: &str) -> Result<String, StepError> {
    let id = T::parse_insensitively(raw).map_err(|source| StepError::InvalidIdentifier {
        field: field.to_string(),
        source,
    })?;
    let canonical = id.id();
    if canonical != raw {
        debug!(field, from = raw, to = %canonical, "normalized ID casing");
    }
    Ok(canonical)
}

fn set_id(state: &mut StateMap, field: &str, id: String) {
    state.insert(field.to_string(), Value::String(id));
}
