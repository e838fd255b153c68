//! Error types for ID parsing and the identifier registry.

use thiserror::Error;

/// Errors that can occur when parsing an ID against a grammar.
///
/// Parsing is deterministic, so none of these are worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The number of path segments does not match the grammar.
    #[error(
        "parsing {kind} ID {input:?}: expected {expected} segments but got {actual}; \
         the ID should be in the format {format:?}"
    )]
    MalformedIdentifier {
        kind: &'static str,
        input: String,
        expected: usize,
        actual: usize,
        format: String,
    },

    /// A segment that requires a value was empty.
    #[error("parsing {kind} ID: the segment {segment:?} was not specified")]
    MissingSegment {
        kind: &'static str,
        segment: &'static str,
    },

    /// A literal segment did not match the grammar.
    #[error("parsing {kind} ID: expected segment {segment:?} to be {expected:?}, got {got:?}")]
    UnknownLiteral {
        kind: &'static str,
        segment: &'static str,
        expected: String,
        got: String,
    },
}

impl ParseError {
    /// Returns the ID kind whose grammar rejected the input.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::MalformedIdentifier { kind, .. }
            | ParseError::MissingSegment { kind, .. }
            | ParseError::UnknownLiteral { kind, .. } => kind,
        }
    }

    /// Returns true if the input had the wrong number of segments.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ParseError::MalformedIdentifier { .. })
    }

    /// Returns true if a literal segment did not match.
    pub fn is_literal_mismatch(&self) -> bool {
        matches!(self, ParseError::UnknownLiteral { .. })
    }
}

/// Errors raised by the identifier registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No registered grammar declares this literal.
    #[error("no registered ID declares the literal {0:?}")]
    NotFound(String),

    /// Two grammars declare the same literal with different casing.
    #[error(
        "literal {literal:?} registered by {incoming_kind} as {incoming:?} \
         but already registered by {existing_kind} as {existing:?}"
    )]
    ConflictingCasing {
        literal: String,
        existing: &'static str,
        existing_kind: &'static str,
        incoming: &'static str,
        incoming_kind: &'static str,
    },

    /// The same ID kind was registered twice.
    #[error("ID kind {0} is already registered")]
    DuplicateKind(&'static str),

    /// The process-wide recaser has already been installed.
    #[error("the process-wide recaser is already installed")]
    AlreadyInstalled,
}

impl RegistryError {
    /// Returns true if this is a lookup miss, which callers may recover from.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }
}
