//! Rendering IDs back to their canonical path.

use crate::grammar::Grammar;
use crate::segment::Segment;
use crate::SEPARATOR;

/// Formats an ID from a grammar and a lookup for value segments.
///
/// Literal segments always render their canonical text, so the output parses
/// strictly. Constant segments render whatever the lookup returns for them,
/// which for a parsed ID is already the canonical value. Every value segment
/// must have a lookup entry; a missing one renders empty and trips a debug
/// assertion.
pub fn format_id<'a>(grammar: &Grammar, lookup: impl Fn(&'static str) -> Option<&'a str>) -> String {
    let mut out = String::new();
    for segment in grammar.segments() {
        out.push(SEPARATOR);
        match segment {
            Segment::Static { value, .. } | Segment::ResourceProvider { value, .. } => {
                out.push_str(value);
            }
            Segment::Constant { .. } => {
                out.push_str(lookup(segment.name()).unwrap_or_default());
            }
            Segment::UserSpecified { name }
            | Segment::SubscriptionId { name }
            | Segment::ResourceGroup { name } => {
                let value = lookup(segment.name());
                debug_assert!(value.is_some(), "no value for segment `{name}` of {}", grammar.kind());
                out.push_str(value.unwrap_or_default());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    static SLOT: Grammar = Grammar::new(
        "Web App Slot",
        &[
            Segment::static_("staticSites", "sites"),
            Segment::user_specified("siteName"),
            Segment::constant("slotKind", &["slots", "deploymentSlots"]),
            Segment::user_specified("slotName"),
        ],
    );

    #[test]
    fn test_format_uses_canonical_literals_and_values() {
        let formatted = format_id(&SLOT, |name| match name {
            "siteName" => Some("MySite"),
            "slotKind" => Some("slots"),
            "slotName" => Some("staging"),
            _ => None,
        });
        assert_eq!(formatted, "/sites/MySite/slots/staging");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no value for segment `slotName` of Web App Slot")]
    fn test_format_missing_value_asserts() {
        format_id(&SLOT, |name| match name {
            "siteName" => Some("MySite"),
            "slotKind" => Some("slots"),
            _ => None,
        });
    }
}
