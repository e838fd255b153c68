//! Macros for defining typed resource IDs.

/// Macro to define a typed resource ID over a static [`Grammar`](crate::Grammar).
///
/// This generates a struct with one `String` field per value segment and:
/// - `new()` taking every field in order
/// - a [`ResourceId`](crate::ResourceId) implementation (`SEGMENT_NAMES`, `parse`,
///   `parse_insensitively`, `id`)
/// - `Display` (canonical path) and `FromStr` (strict parse)
/// - `Serialize` and `Deserialize` as the canonical path string
///
/// Each field is mapped to the name of the grammar segment it holds.
///
/// # Example
///
/// ```ignore
/// static REDIS: Grammar = Grammar::new("Redis", &[
///     Segment::static_("staticSubscriptions", "subscriptions"),
///     Segment::subscription_id("subscriptionId"),
///     // ...
///     Segment::user_specified("redisName"),
/// ]);
///
/// define_resource_id!(
///     /// A Redis cache.
///     RedisId, REDIS, {
///         subscription_id: "subscriptionId",
///         resource_group_name: "resourceGroupName",
///         redis_name: "redisName",
///     }
/// );
///
/// let id = RedisId::parse_insensitively("/SUBSCRIPTIONS/.../Redis/cache1")?;
/// assert_eq!(id.to_string(), "/subscriptions/.../redis/cache1");
/// ```
#[macro_export]
macro_rules! define_resource_id {
    (
        $(#[$meta:meta])*
        $name:ident, $grammar:path, { $($field:ident: $segment:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            $(
                #[doc = concat!("Value of the `", $segment, "` segment.")]
                pub $field: String,
            )+
        }

        impl $name {
            /// Creates the ID from its segment values.
            #[must_use]
            pub fn new($($field: impl Into<String>),+) -> Self {
                Self {
                    $($field: $field.into(),)+
                }
            }
        }

        impl $crate::ResourceId for $name {
            const SEGMENT_NAMES: &'static [&'static str] = &[$($segment),+];

            fn grammar() -> &'static $crate::Grammar {
                &$grammar
            }

            fn from_parse_result(
                result: &$crate::ParseResult,
            ) -> Result<Self, $crate::ParseError> {
                Ok(Self {
                    $($field: result.get_owned($segment)?,)+
                })
            }

            fn segment_value(&self, segment: &str) -> Option<&str> {
                match segment {
                    $($segment => Some(self.$field.as_str()),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::ResourceId::id(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::ResourceId>::parse(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(&$crate::ResourceId::id(self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::ResourceId>::parse(&s)
                    .map_err($crate::__private::serde::de::Error::custom)
            }
        }
    };
}
