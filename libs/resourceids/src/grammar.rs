//! Grammar: the fixed, ordered segment list for one ID kind.

use crate::segment::Segment;
use crate::SEPARATOR;

/// The ordered segments that make up one ID kind.
///
/// Grammars are plain data and are normally declared as `static` items so the
/// registry can hold `&'static Grammar` references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grammar {
    kind: &'static str,
    segments: &'static [Segment],
}

impl Grammar {
    /// Creates a grammar for the given ID kind.
    pub const fn new(kind: &'static str, segments: &'static [Segment]) -> Self {
        Self { kind, segments }
    }

    /// Returns the human-readable ID kind (e.g. `Kubernetes Cluster`).
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the segments in path order.
    pub const fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Returns the canonical format string, e.g.
    /// `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}`.
    pub fn format_string(&self) -> String {
        self.join(Segment::placeholder)
    }

    /// Returns an example ID in this grammar, useful in error messages.
    pub fn example_value(&self) -> String {
        self.join(Segment::example_value)
    }

    /// Returns every canonical literal declared by this grammar, in order.
    pub fn literals(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments
            .iter()
            .flat_map(|segment| segment.literals().iter().copied())
    }

    /// Returns the names of the segments that carry caller values.
    pub fn value_segment_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments
            .iter()
            .filter(|segment| !segment.is_literal())
            .map(Segment::name)
    }

    fn join(&self, render: impl Fn(&Segment) -> String) -> String {
        let mut out = String::new();
        for segment in self.segments {
            out.push(SEPARATOR);
            out.push_str(&render(segment));
        }
        out
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.format_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static REDIS: Grammar = Grammar::new(
        "Redis",
        &[
            Segment::static_("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_("staticResourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName"),
            Segment::static_("staticProviders", "providers"),
            Segment::resource_provider("staticMicrosoftCache", "Microsoft.Cache"),
            Segment::static_("staticRedis", "redis"),
            Segment::user_specified("redisName"),
        ],
    );

    #[test]
    fn test_format_string() {
        assert_eq!(
            REDIS.format_string(),
            "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Cache/redis/{redisName}"
        );
    }

    #[test]
    fn test_example_value() {
        assert_eq!(
            REDIS.example_value(),
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.Cache/redis/redisNameValue"
        );
    }

    #[test]
    fn test_literals_in_order() {
        let literals: Vec<_> = REDIS.literals().collect();
        assert_eq!(
            literals,
            vec!["subscriptions", "resourceGroups", "providers", "Microsoft.Cache", "redis"]
        );
    }

    #[test]
    fn test_value_segment_names() {
        let names: Vec<_> = REDIS.value_segment_names().collect();
        assert_eq!(names, vec!["subscriptionId", "resourceGroupName", "redisName"]);
    }
}
