//! Error types for state upgrades.

use arm_resourceids::ParseError;
use thiserror::Error;

/// Why a field did not match the shape a step expects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeViolation {
    /// A required field is absent or null.
    #[error("required field is missing")]
    Missing,

    /// The field holds a value of the wrong type.
    #[error("expected {expected}, found {actual}")]
    WrongType {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Errors returned by a single upgrade step.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StepError {
    /// The state does not have the shape this step expects.
    #[error("field {field:?}: {reason}")]
    IncompatibleState {
        field: String,
        reason: ShapeViolation,
    },

    /// An ID held in the state could not be parsed.
    #[error("field {field:?}: {source}")]
    InvalidIdentifier {
        field: String,
        #[source]
        source: ParseError,
    },
}

impl StepError {
    /// Creates an error for a missing required field.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::IncompatibleState {
            field: field.into(),
            reason: ShapeViolation::Missing,
        }
    }

    /// Creates an error for a field holding the wrong type.
    pub fn wrong_type(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::IncompatibleState {
            field: field.into(),
            reason: ShapeViolation::WrongType { expected, actual },
        }
    }

    /// Returns the field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            StepError::IncompatibleState { field, .. } | StepError::InvalidIdentifier { field, .. } => {
                field
            }
        }
    }
}

/// Errors returned by the upgrade pipeline.
///
/// When any of these is returned, the caller's state has not been modified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MigrationError {
    /// The state was written by a newer version than the one running.
    #[error(
        "{resource} state is at schema version {stored}, newer than the supported version {target}; \
         downgrading state is not supported"
    )]
    FutureVersion {
        resource: String,
        stored: u32,
        target: u32,
    },

    /// The requested target version has no chain of steps leading to it.
    #[error("{resource} has no schema version {target}; the current version is {current}")]
    UnknownTargetVersion {
        resource: String,
        target: u32,
        current: u32,
    },

    /// The state did not have the shape a step expects.
    #[error("upgrading {resource} state from schema version {step}: field {field:?}: {reason}")]
    IncompatibleState {
        resource: String,
        step: u32,
        field: String,
        reason: ShapeViolation,
    },

    /// A step could not parse an ID held in the state.
    #[error("upgrading {resource} state from schema version {step}: field {field:?}: {source}")]
    InvalidIdentifier {
        resource: String,
        step: u32,
        field: String,
        #[source]
        source: ParseError,
    },

    /// No upgrade chain is registered for the resource kind.
    #[error("no state upgrades registered for resource {0:?}")]
    UnknownResource(String),
}

impl MigrationError {
    /// Wraps a step error with the resource and step it came from.
    pub fn from_step(resource: &str, step: u32, err: StepError) -> Self {
        match err {
            StepError::IncompatibleState { field, reason } => Self::IncompatibleState {
                resource: resource.to_string(),
                step,
                field,
                reason,
            },
            StepError::InvalidIdentifier { field, source } => Self::InvalidIdentifier {
                resource: resource.to_string(),
                step,
                field,
                source,
            },
        }
    }

    /// Returns true if the state comes from a newer schema version.
    pub fn is_future_version(&self) -> bool {
        matches!(self, MigrationError::FutureVersion { .. })
    }

    /// Returns true if a step rejected the state's shape.
    pub fn is_incompatible_state(&self) -> bool {
        matches!(self, MigrationError::IncompatibleState { .. })
    }
}

/// Errors raised while assembling upgrade chains.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The step versions do not form a contiguous run starting at 0.
    #[error("{resource} upgrade steps must be contiguous from 0: expected step {expected}, found {found}")]
    NonContiguous {
        resource: &'static str,
        expected: u32,
        found: u32,
    },

    /// Two steps were declared for the same version boundary.
    #[error("{resource} declares more than one upgrade step from version {version}")]
    DuplicateStep { resource: &'static str, version: u32 },

    /// A chain was registered twice for the same resource.
    #[error("upgrade chain for {0} is already registered")]
    DuplicateResource(&'static str),
}
