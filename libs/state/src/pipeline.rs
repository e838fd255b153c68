//! The upgrade pipeline: applies a contiguous run of steps in order.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::MigrationError;
use crate::upgrade::StateUpgrade;
use crate::value::StateMap;

/// State that has been brought to a schema version.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpgradedState {
    /// The upgraded state.
    pub state: StateMap,

    /// The schema version the state is now at. Store this alongside it.
    pub version: u32,

    /// The version the state was read at.
    #[serde(skip)]
    pub from_version: u32,
}

impl UpgradedState {
    /// Returns the number of steps that were applied.
    pub fn steps_applied(&self) -> u32 {
        self.version - self.from_version
    }
}

/// Upgrades `state` from version `from` to version `to`.
///
/// `steps[n]` is the step from version `n` to `n + 1`. Steps run strictly in
/// ascending order, each one receiving the previous one's output. Before a
/// step runs, the state is checked against the step's schema.
///
/// The caller's `state` is never modified: on success the upgraded copy is
/// returned, on failure nothing is.
pub fn upgrade<S>(
    resource: &str,
    state: &StateMap,
    from: u32,
    to: u32,
    steps: &[S],
) -> Result<UpgradedState, MigrationError>
where
    S: AsRef<dyn StateUpgrade>,
{
    if from == to {
        return Ok(UpgradedState {
            state: state.clone(),
            version: to,
            from_version: from,
        });
    }

    if from > to {
        return Err(MigrationError::FutureVersion {
            resource: resource.to_string(),
            stored: from,
            target: to,
        });
    }

    let current = u32::try_from(steps.len()).unwrap_or(u32::MAX);
    if to > current {
        return Err(MigrationError::UnknownTargetVersion {
            resource: resource.to_string(),
            target: to,
            current,
        });
    }

    let mut working = state.clone();
    for (version, step) in (from..to).zip(&steps[from as usize..to as usize]) {
        let step = step.as_ref();
        step.schema()
            .check(&working)
            .map_err(|err| MigrationError::from_step(resource, version, err))?;

        debug!(resource, version, step = step.name(), "applying state upgrade");
        working = step
            .upgrade(working)
            .map_err(|err| MigrationError::from_step(resource, version, err))?;
    }

    info!(resource, from, to, "upgraded state");
    Ok(UpgradedState {
        state: working,
        version: to,
        from_version: from,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::error::{ShapeViolation, StepError};
    use crate::shape::{FieldKind, StateSchema};
    use crate::upgrade::upgrade_fn;

    fn state(value: Value) -> StateMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("test state must be an object"),
        }
    }

    /// Each step appends its version to `trail` and requires `trail` to exist.
    fn counting_steps(n: u32) -> Vec<Box<dyn StateUpgrade>> {
        (0..n)
            .map(|v| {
                Box::new(upgrade_fn(
                    "append",
                    StateSchema::new().required("trail", FieldKind::List(Box::new(FieldKind::Int))),
                    move |mut s: StateMap| {
                        if let Some(Value::Array(trail)) = s.get_mut("trail") {
                            trail.push(json!(v));
                        }
                        Ok(s)
                    },
                )) as Box<dyn StateUpgrade>
            })
            .collect()
    }

    #[test]
    fn test_same_version_is_noop() {
        let s = state(json!({"anything": [1, 2]}));
        let out = upgrade("r", &s, 3, 3, &counting_steps(1)).unwrap();
        assert_eq!(out.state, s);
        assert_eq!(out.version, 3);
        assert_eq!(out.steps_applied(), 0);
    }

    #[test]
    fn test_future_version_is_fatal() {
        let s = state(json!({"trail": []}));
        let err = upgrade("r", &s, 5, 3, &counting_steps(5)).unwrap_err();
        assert_eq!(
            err,
            MigrationError::FutureVersion {
                resource: "r".to_string(),
                stored: 5,
                target: 3,
            }
        );
        assert_eq!(s, state(json!({"trail": []})));
    }

    #[test]
    fn test_steps_run_in_order() {
        let s = state(json!({"trail": []}));
        let out = upgrade("r", &s, 1, 4, &counting_steps(4)).unwrap();
        assert_eq!(out.state, state(json!({"trail": [1, 2, 3]})));
        assert_eq!(out.version, 4);
        assert_eq!(out.steps_applied(), 3);
    }

    #[test]
    fn test_unknown_target_version() {
        let s = state(json!({"trail": []}));
        let err = upgrade("r", &s, 0, 3, &counting_steps(2)).unwrap_err();
        assert!(matches!(
            err,
            MigrationError::UnknownTargetVersion { target: 3, current: 2, .. }
        ));
    }

    #[test]
    fn test_incompatible_state_aborts_without_mutation() {
        let s = state(json!({"other": true}));
        let err = upgrade("r", &s, 0, 2, &counting_steps(2)).unwrap_err();
        assert_eq!(
            err,
            MigrationError::IncompatibleState {
                resource: "r".to_string(),
                step: 0,
                field: "trail".to_string(),
                reason: ShapeViolation::Missing,
            }
        );
        assert_eq!(s, state(json!({"other": true})));
    }

    #[test]
    fn test_failure_midway_returns_no_partial_state() {
        let mut steps = counting_steps(1);
        steps.push(Box::new(upgrade_fn("fail", StateSchema::new(), |_| {
            Err(StepError::missing("late_field"))
        })));
        let s = state(json!({"trail": []}));
        let err = upgrade("r", &s, 0, 2, &steps).unwrap_err();
        assert!(err.is_incompatible_state());
        assert!(matches!(err, MigrationError::IncompatibleState { step: 1, .. }));
        assert_eq!(s, state(json!({"trail": []})));
    }
}
