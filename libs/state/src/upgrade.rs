//! The [`StateUpgrade`] trait implemented by every version-to-version step.

use crate::error::StepError;
use crate::shape::StateSchema;
use crate::value::StateMap;

/// A single step from schema version N to N+1.
///
/// The pipeline checks the state against [`schema`](StateUpgrade::schema)
/// before calling [`upgrade`](StateUpgrade::upgrade), so a step may rely on
/// every documented required field being present with the documented type.
/// Steps are pure: they must not perform I/O and must either fully apply or
/// return an error.
pub trait StateUpgrade: Send + Sync {
    /// The shape of state this step accepts.
    fn schema(&self) -> StateSchema;

    /// Transforms the state to the next version.
    fn upgrade(&self, state: StateMap) -> Result<StateMap, StepError>;

    /// A name for logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A step built from a schema and a function.
pub struct FnUpgrade<F> {
    name: &'static str,
    schema: StateSchema,
    func: F,
}

impl<F> std::fmt::Debug for FnUpgrade<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnUpgrade")
            .field("name", &self.name)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl<F> StateUpgrade for FnUpgrade<F>
where
    F: Fn(StateMap) -> Result<StateMap, StepError> + Send + Sync,
{
    fn schema(&self) -> StateSchema {
        self.schema.clone()
    }

    fn upgrade(&self, state: StateMap) -> Result<StateMap, StepError> {
        (self.func)(state)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Creates a step from a schema and a function.
pub fn upgrade_fn<F>(name: &'static str, schema: StateSchema, func: F) -> FnUpgrade<F>
where
    F: Fn(StateMap) -> Result<StateMap, StepError> + Send + Sync,
{
    FnUpgrade { name, schema, func }
}
