//! The [`ResourceId`] trait implemented by every typed ID.

use crate::error::ParseError;
use crate::format::format_id;
use crate::grammar::Grammar;
use crate::parser::{ParseMode, ParseResult, Parser};

/// A typed ID with one field per value segment of its grammar.
///
/// Implementations are normally generated by [`define_resource_id!`](crate::define_resource_id).
pub trait ResourceId: Sized {
    /// Names of the grammar segments this ID holds, in field order.
    const SEGMENT_NAMES: &'static [&'static str];

    /// Returns the grammar for this ID kind.
    fn grammar() -> &'static Grammar;

    /// Builds the ID from a successful parse.
    fn from_parse_result(result: &ParseResult) -> Result<Self, ParseError>;

    /// Returns the value held for a segment, if this ID holds one.
    fn segment_value(&self, segment: &str) -> Option<&str>;

    /// Parses an ID requiring exact literal casing.
    fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with_mode(input, ParseMode::Strict)
    }

    /// Parses an ID tolerating case drift in literal segments.
    ///
    /// Only use this for IDs returned by the remote API or read from
    /// previously persisted state.
    fn parse_insensitively(input: &str) -> Result<Self, ParseError> {
        Self::parse_with_mode(input, ParseMode::Insensitive)
    }

    /// Parses an ID in the given mode.
    fn parse_with_mode(input: &str, mode: ParseMode) -> Result<Self, ParseError> {
        let result = Parser::new(Self::grammar()).parse(input, mode)?;
        Self::from_parse_result(&result)
    }

    /// Formats the ID as its canonical path.
    fn id(&self) -> String {
        format_id(Self::grammar(), |segment| self.segment_value(segment))
    }
}
