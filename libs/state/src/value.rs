//! The persisted state mapping and accessors for upgrade steps.
//!
//! State is a mapping from field name to a dynamically-typed value: string,
//! number, bool, list or nested mapping. Nested blocks are stored the way the
//! calling application stores them, as a list holding one mapping per block.

use serde_json::Value;

use crate::error::StepError;

/// A resource's persisted state.
pub type StateMap = serde_json::Map<String, Value>;

/// Returns the name of a value's type, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

/// Returns a string field, treating absent and null as `None`.
pub fn get_str<'a>(state: &'a StateMap, field: &str) -> Result<Option<&'a str>, StepError> {
    match state.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(StepError::wrong_type(field, "string", value_kind(other))),
    }
}

/// Returns a string field that must be present.
pub fn require_str<'a>(state: &'a StateMap, field: &str) -> Result<&'a str, StepError> {
    get_str(state, field)?.ok_or_else(|| StepError::missing(field))
}

/// Returns the first block of a nested-block field.
///
/// Absent, null and empty lists all yield `None`.
pub fn first_block<'a>(state: &'a StateMap, field: &str) -> Result<Option<&'a StateMap>, StepError> {
    match state.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => match items.first() {
            None => Ok(None),
            Some(Value::Object(block)) => Ok(Some(block)),
            Some(other) => Err(StepError::wrong_type(
                format!("{field}.0"),
                "map",
                value_kind(other),
            )),
        },
        Some(other) => Err(StepError::wrong_type(field, "list", value_kind(other))),
    }
}

/// Moves a field to a new name, overwriting any existing value there.
pub fn rename_field(state: &mut StateMap, from: &str, to: &str) -> Result<(), StepError> {
    let value = state.remove(from).ok_or_else(|| StepError::missing(from))?;
    state.insert(to.to_string(), value);
    Ok(())
}

/// Sets a field to a single nested block.
pub fn set_single_block(state: &mut StateMap, field: &str, block: StateMap) {
    state.insert(field.to_string(), Value::Array(vec![Value::Object(block)]));
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ShapeViolation;

    fn state(value: Value) -> StateMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("test state must be an object"),
        }
    }

    #[test]
    fn test_get_str() {
        let s = state(json!({"id": "/a", "n": 1, "empty": null}));
        assert_eq!(get_str(&s, "id").unwrap(), Some("/a"));
        assert_eq!(get_str(&s, "absent").unwrap(), None);
        assert_eq!(get_str(&s, "empty").unwrap(), None);
        assert_eq!(
            get_str(&s, "n").unwrap_err(),
            StepError::wrong_type("n", "string", "int")
        );
    }

    #[test]
    fn test_require_str_missing() {
        let s = state(json!({}));
        assert_eq!(
            require_str(&s, "id").unwrap_err(),
            StepError::IncompatibleState {
                field: "id".to_string(),
                reason: ShapeViolation::Missing,
            }
        );
    }

    #[test]
    fn test_first_block() {
        let s = state(json!({
            "rbac": [{"enabled": true}],
            "none": [],
            "bad": ["x"],
        }));
        assert_eq!(
            first_block(&s, "rbac").unwrap().and_then(|b| b.get("enabled")),
            Some(&json!(true))
        );
        assert!(first_block(&s, "none").unwrap().is_none());
        assert!(first_block(&s, "missing").unwrap().is_none());
        assert_eq!(first_block(&s, "bad").unwrap_err().field(), "bad.0");
    }

    #[test]
    fn test_rename_field() {
        let mut s = state(json!({"old_name": "x"}));
        rename_field(&mut s, "old_name", "name").unwrap();
        assert_eq!(s, state(json!({"name": "x"})));
        assert!(rename_field(&mut s, "old_name", "name").is_err());
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&json!(1.5)), "float");
        assert_eq!(value_kind(&json!(2)), "int");
        assert_eq!(value_kind(&json!({})), "map");
    }
}
