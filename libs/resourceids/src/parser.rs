//! Strict and case-insensitive parsing of IDs against a [`Grammar`].

use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::grammar::Grammar;
use crate::segment::Segment;
use crate::SEPARATOR;

/// How literal segments are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseMode {
    /// Literal segments must match their canonical text exactly.
    #[default]
    Strict,

    /// Literal segments match ignoring ASCII case; the canonical text is
    /// recorded. Only for IDs that come from outside the caller's control:
    /// using it on user input would hide typos in configuration.
    ///
    /// Matching uses the grammar's own canonical literals and never consults
    /// the [`Recaser`](crate::Recaser); registration rejects grammars whose
    /// literals disagree in casing, so both give the same canonical text.
    Insensitive,
}

impl ParseMode {
    /// Returns true for [`ParseMode::Insensitive`].
    pub fn is_insensitive(&self) -> bool {
        matches!(self, Self::Insensitive)
    }
}

/// The outcome of a successful parse: one value per segment name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    kind: &'static str,
    parsed: BTreeMap<&'static str, String>,
    raw_input: String,
    consumed: usize,
}

impl ParseResult {
    /// Returns the value recorded for a segment.
    pub fn get(&self, segment: &'static str) -> Result<&str, ParseError> {
        self.parsed
            .get(&segment)
            .map(String::as_str)
            .ok_or(ParseError::MissingSegment {
                kind: self.kind,
                segment,
            })
    }

    /// Returns the value recorded for a segment as an owned string.
    pub fn get_owned(&self, segment: &'static str) -> Result<String, ParseError> {
        self.get(segment).map(str::to_string)
    }

    /// Returns the input the result was parsed from.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Returns the number of path segments consumed.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Iterates over all recorded `(segment name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.parsed.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

/// Parses IDs for one grammar.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
}

impl<'g> Parser<'g> {
    /// Creates a parser for the grammar.
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    /// Parses `input` in the given mode.
    ///
    /// One leading and one trailing `/` are ignored. The remaining path must
    /// have exactly one token per segment.
    pub fn parse(&self, input: &str, mode: ParseMode) -> Result<ParseResult, ParseError> {
        let kind = self.grammar.kind();
        let segments = self.grammar.segments();
        let tokens = tokenize(input);

        if tokens.len() != segments.len() {
            return Err(ParseError::MalformedIdentifier {
                kind,
                input: input.to_string(),
                expected: segments.len(),
                actual: tokens.len(),
                format: self.grammar.format_string(),
            });
        }

        let mut parsed = BTreeMap::new();
        for (segment, token) in segments.iter().zip(&tokens) {
            let value = parse_segment(kind, segment, token, mode)?;
            parsed.insert(segment.name(), value);
        }

        Ok(ParseResult {
            kind,
            parsed,
            raw_input: input.to_string(),
            consumed: tokens.len(),
        })
    }

    /// Parses `input` requiring exact literal casing.
    pub fn parse_strict(&self, input: &str) -> Result<ParseResult, ParseError> {
        self.parse(input, ParseMode::Strict)
    }

    /// Parses `input` tolerating literal case drift.
    pub fn parse_insensitively(&self, input: &str) -> Result<ParseResult, ParseError> {
        self.parse(input, ParseMode::Insensitive)
    }
}

fn tokenize(input: &str) -> Vec<&str> {
    let trimmed = input.strip_prefix(SEPARATOR).unwrap_or(input);
    let trimmed = trimmed.strip_suffix(SEPARATOR).unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(SEPARATOR).collect()
}

fn parse_segment(
    kind: &'static str,
    segment: &Segment,
    token: &str,
    mode: ParseMode,
) -> Result<String, ParseError> {
    if token.is_empty() {
        return Err(ParseError::MissingSegment {
            kind,
            segment: segment.name(),
        });
    }

    if !segment.is_literal() {
        return Ok(token.to_string());
    }

    segment
        .match_literal(token, mode.is_insensitive())
        .map(str::to_string)
        .ok_or_else(|| ParseError::UnknownLiteral {
            kind,
            segment: segment.name(),
            expected: segment.literals().join(" | "),
            got: token.to_string(),
        })
}
