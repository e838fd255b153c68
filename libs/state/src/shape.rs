//! The shape of state an upgrade step expects.
//!
//! A step only documents the fields it reads or that must exist at its
//! version; anything else in the state passes through unchecked.

use serde_json::Value;

use crate::error::StepError;
use crate::value::{value_kind, StateMap};

/// The type of a documented field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Int,
    Float,
    Bool,
    /// An ordered list of values.
    List(Box<FieldKind>),
    /// An unordered collection of values, persisted as a list.
    Set(Box<FieldKind>),
    /// A string-keyed mapping.
    Map,
    /// Nested blocks, persisted as a list of mappings.
    Block(StateSchema),
}

impl FieldKind {
    /// Returns the name of this kind, for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::Bool => "bool",
            FieldKind::List(_) | FieldKind::Set(_) | FieldKind::Block(_) => "list",
            FieldKind::Map => "map",
        }
    }

    fn check(&self, path: &str, value: &Value) -> Result<(), StepError> {
        let mismatch = || StepError::wrong_type(path, self.name(), value_kind(value));
        match (self, value) {
            (FieldKind::String, Value::String(_)) | (FieldKind::Bool, Value::Bool(_)) => Ok(()),
            (FieldKind::Int, Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(()),
            (FieldKind::Float, Value::Number(_)) => Ok(()),
            (FieldKind::Map, Value::Object(_)) => Ok(()),
            (FieldKind::List(elem) | FieldKind::Set(elem), Value::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    elem.check(&format!("{path}.{i}"), item)?;
                }
                Ok(())
            }
            (FieldKind::Block(schema), Value::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    let block_path = format!("{path}.{i}");
                    match item {
                        Value::Object(block) => schema.check_at(&block_path, block)?,
                        other => {
                            return Err(StepError::wrong_type(block_path, "map", value_kind(other)))
                        }
                    }
                }
                Ok(())
            }
            _ => Err(mismatch()),
        }
    }
}

/// One documented field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// The documented fields of a state version.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateSchema {
    fields: Vec<FieldSchema>,
}

impl StateSchema {
    /// Creates a schema with no documented fields, which accepts any state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents a field that must be present and non-null.
    #[must_use]
    pub fn required(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldSchema {
            name,
            kind,
            required: true,
        });
        self
    }

    /// Documents a field that may be absent or null.
    #[must_use]
    pub fn optional(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldSchema {
            name,
            kind,
            required: false,
        });
        self
    }

    /// Returns the documented fields.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Returns a documented field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks that `state` has this shape.
    ///
    /// Nested fields are reported with a dotted path, e.g. `default_node_pool.0.name`.
    pub fn check(&self, state: &StateMap) -> Result<(), StepError> {
        self.check_at("", state)
    }

    fn check_at(&self, prefix: &str, state: &StateMap) -> Result<(), StepError> {
        for field in &self.fields {
            let path = if prefix.is_empty() {
                field.name.to_string()
            } else {
                format!("{prefix}.{}", field.name)
            };
            match state.get(field.name) {
                None | Some(Value::Null) if field.required => return Err(StepError::missing(path)),
                None | Some(Value::Null) => {}
                Some(value) => field.kind.check(&path, value)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::error::ShapeViolation;

    fn state(value: Value) -> StateMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("test state must be an object"),
        }
    }

    fn cluster_schema() -> StateSchema {
        StateSchema::new()
            .required("name", FieldKind::String)
            .optional("dns_prefix", FieldKind::String)
            .optional("tags", FieldKind::Map)
            .required(
                "default_node_pool",
                FieldKind::Block(
                    StateSchema::new()
                        .required("name", FieldKind::String)
                        .optional("node_count", FieldKind::Int)
                        .optional("zones", FieldKind::Set(Box::new(FieldKind::String))),
                ),
            )
    }

    #[test]
    fn test_check_accepts_matching_state() {
        let s = state(json!({
            "name": "aks1",
            "dns_prefix": null,
            "default_node_pool": [{"name": "default", "node_count": 3, "zones": ["1", "2"]}],
            "undocumented": 42,
        }));
        cluster_schema().check(&s).unwrap();
    }

    #[test]
    fn test_check_missing_required() {
        let s = state(json!({"default_node_pool": []}));
        assert_eq!(cluster_schema().check(&s).unwrap_err(), StepError::missing("name"));
    }

    #[test]
    fn test_check_null_required_is_missing() {
        let s = state(json!({"name": null, "default_node_pool": []}));
        assert_eq!(cluster_schema().check(&s).unwrap_err(), StepError::missing("name"));
    }

    #[test]
    fn test_check_nested_missing_reports_path() {
        let s = state(json!({"name": "aks1", "default_node_pool": [{"node_count": 1}]}));
        assert_eq!(
            cluster_schema().check(&s).unwrap_err(),
            StepError::IncompatibleState {
                field: "default_node_pool.0.name".to_string(),
                reason: ShapeViolation::Missing,
            }
        );
    }

    #[test]
    fn test_check_wrong_type() {
        let s = state(json!({"name": "aks1", "default_node_pool": [{"name": "p", "node_count": "3"}]}));
        assert_eq!(
            cluster_schema().check(&s).unwrap_err(),
            StepError::wrong_type("default_node_pool.0.node_count", "int", "string")
        );
    }

    #[test]
    fn test_check_set_elements() {
        let s = state(json!({"name": "aks1", "default_node_pool": [{"name": "p", "zones": ["1", 2]}]}));
        assert_eq!(
            cluster_schema().check(&s).unwrap_err(),
            StepError::wrong_type("default_node_pool.0.zones.1", "string", "int")
        );
    }

    #[test]
    fn test_float_accepts_integers() {
        let schema = StateSchema::new().required("ratio", FieldKind::Float);
        schema.check(&state(json!({"ratio": 1}))).unwrap();
        schema.check(&state(json!({"ratio": 0.5}))).unwrap();
    }

    #[test]
    fn test_empty_schema_accepts_anything() {
        StateSchema::new().check(&state(json!({"x": [1, "a"]}))).unwrap();
    }

    #[rstest]
    #[case::string(FieldKind::String, json!("a"), true)]
    #[case::int(FieldKind::Int, json!(3), true)]
    #[case::int_rejects_float(FieldKind::Int, json!(1.5), false)]
    #[case::bool(FieldKind::Bool, json!(true), true)]
    #[case::bool_rejects_string(FieldKind::Bool, json!("true"), false)]
    #[case::map(FieldKind::Map, json!({"k": "v"}), true)]
    #[case::list(FieldKind::List(Box::new(FieldKind::Int)), json!([1, 2]), true)]
    #[case::block_rejects_map(FieldKind::Block(StateSchema::new()), json!({"k": 1}), false)]
    fn test_field_kinds(#[case] kind: FieldKind, #[case] value: Value, #[case] accepted: bool) {
        let schema = StateSchema::new().required("f", kind);
        let mut s = StateMap::new();
        s.insert("f".to_string(), value);
        assert_eq!(schema.check(&s).is_ok(), accepted);
    }
}
