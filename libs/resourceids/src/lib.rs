//! # arm-resourceids
//!
//! Typed grammars for hierarchical resource IDs, with strict and
//! case-insensitive parsing, canonical formatting and re-casing.
//!
//! ## Design Principles
//!
//! - A grammar is a fixed, ordered list of [`Segment`]s defined once per ID kind
//! - A parsed ID is fully resolved; there is no partially-valid ID
//! - Formatting always emits canonical casing (parse → format → parse roundtrips)
//! - Insensitive parsing is only for IDs that come from outside the caller's
//!   control (API responses, previously persisted state), never for user input
//!
//! ## ID Format
//!
//! IDs are `/`-separated paths of literal keywords and caller-supplied values:
//!
//! ```text
//! /subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Cache/redis/{redisName}
//! ```
//!
//! The remote API frequently returns the literal segments in a different case
//! (`resourcegroups`, `Microsoft.cache`). [`ParseMode::Insensitive`] tolerates
//! that drift and records the canonical literal, and the [`Recaser`] recovers
//! canonical casing for any registered literal without knowing the ID kind.

mod error;
mod format;
mod grammar;
mod macros;
mod parser;
pub mod recaser;
mod resource_id;
mod segment;

pub use error::{ParseError, RegistryError};
pub use format::format_id;
pub use grammar::Grammar;
pub use parser::{ParseMode, ParseResult, Parser};
pub use recaser::{Recaser, RecaserBuilder};
pub use resource_id::ResourceId;
pub use segment::Segment;

/// The separator between path segments.
pub const SEPARATOR: char = '/';

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
