//! Segment definitions: the typed components of an ID grammar.

/// One atomic unit of an ID path.
///
/// Every segment carries a field name. Literal segments (static, provider,
/// constant) record their canonical text under that name when parsed; value
/// segments record the caller's value verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A fixed path keyword such as `resourceGroups`.
    Static {
        name: &'static str,
        value: &'static str,
    },

    /// An opaque caller-chosen name.
    UserSpecified { name: &'static str },

    /// A subscription GUID scoping the ID.
    SubscriptionId { name: &'static str },

    /// A resource group name. The API often returns these in a different case
    /// than they were created with, so the value is kept exactly as given.
    ResourceGroup { name: &'static str },

    /// A provider namespace literal such as `Microsoft.ContainerService`.
    ResourceProvider {
        name: &'static str,
        value: &'static str,
    },

    /// One of a closed set of literals.
    Constant {
        name: &'static str,
        values: &'static [&'static str],
    },
}

impl Segment {
    /// Creates a static literal segment.
    pub const fn static_(name: &'static str, value: &'static str) -> Self {
        Self::Static { name, value }
    }

    /// Creates a user-specified segment.
    pub const fn user_specified(name: &'static str) -> Self {
        Self::UserSpecified { name }
    }

    /// Creates a subscription ID segment.
    pub const fn subscription_id(name: &'static str) -> Self {
        Self::SubscriptionId { name }
    }

    /// Creates a resource group segment.
    pub const fn resource_group(name: &'static str) -> Self {
        Self::ResourceGroup { name }
    }

    /// Creates a resource provider segment.
    pub const fn resource_provider(name: &'static str, value: &'static str) -> Self {
        Self::ResourceProvider { name, value }
    }

    /// Creates a constant segment.
    pub const fn constant(name: &'static str, values: &'static [&'static str]) -> Self {
        Self::Constant { name, values }
    }

    /// Returns the field name of this segment.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Static { name, .. }
            | Self::UserSpecified { name }
            | Self::SubscriptionId { name }
            | Self::ResourceGroup { name }
            | Self::ResourceProvider { name, .. }
            | Self::Constant { name, .. } => *name,
        }
    }

    /// Returns true if this segment must match literal text.
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::Static { .. } | Self::ResourceProvider { .. } | Self::Constant { .. }
        )
    }

    /// Returns the canonical literal texts this segment accepts.
    ///
    /// Empty for value segments.
    pub fn literals(&self) -> &[&'static str] {
        match self {
            Self::Static { value, .. } | Self::ResourceProvider { value, .. } => {
                std::slice::from_ref(value)
            }
            Self::Constant { values, .. } => *values,
            Self::UserSpecified { .. }
            | Self::SubscriptionId { .. }
            | Self::ResourceGroup { .. } => &[],
        }
    }

    /// Matches a token against this segment's literals.
    ///
    /// Returns the canonical literal on a match. Value segments never match.
    pub fn match_literal(&self, token: &str, insensitive: bool) -> Option<&'static str> {
        self.literals().iter().copied().find(|literal| {
            if insensitive {
                literal.eq_ignore_ascii_case(token)
            } else {
                *literal == token
            }
        })
    }

    /// Returns the text used for this segment in a format string.
    pub fn placeholder(&self) -> String {
        match self {
            Self::Static { value, .. } | Self::ResourceProvider { value, .. } => {
                (*value).to_string()
            }
            Self::Constant { name, .. }
            | Self::UserSpecified { name }
            | Self::SubscriptionId { name }
            | Self::ResourceGroup { name } => format!("{{{name}}}"),
        }
    }

    /// Returns an illustrative value for this segment.
    pub fn example_value(&self) -> String {
        match self {
            Self::Static { value, .. } | Self::ResourceProvider { value, .. } => {
                (*value).to_string()
            }
            Self::Constant { values, .. } => {
                values.first().copied().unwrap_or_default().to_string()
            }
            Self::SubscriptionId { .. } => "12345678-1234-9876-4563-123456789012".to_string(),
            Self::ResourceGroup { .. } => "example-resource-group".to_string(),
            Self::UserSpecified { name } => format!("{name}Value"),
        }
    }
}
