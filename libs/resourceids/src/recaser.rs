//! The identifier registry ("recaser").
//!
//! Every ID kind registers its grammar once at start-up. The union of their
//! literal segments, keyed case-insensitively, lets callers recover canonical
//! casing for IDs whose kind they don't know, such as IDs embedded in an API
//! response or in old persisted state.
//!
//! The registry is built by an explicit bootstrap step through
//! [`RecaserBuilder`] and is immutable afterwards. A process-wide instance can
//! be installed once with [`install`]; reads after that need no locking.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::RegistryError;
use crate::format::format_id;
use crate::grammar::Grammar;
use crate::parser::Parser;
use crate::SEPARATOR;

const PROVIDERS: &str = "providers";

/// Token index of `providers` in a resource ID scoped to a resource group.
const PROVIDERS_POSITION: usize = 4;

#[derive(Debug, Clone, Copy)]
struct LiteralEntry {
    canonical: &'static str,
    kind: &'static str,
}

/// Collects grammars during start-up.
#[derive(Debug, Default)]
pub struct RecaserBuilder {
    grammars: Vec<&'static Grammar>,
    literals: HashMap<String, LiteralEntry>,
}

impl RecaserBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a grammar.
    ///
    /// Fails without registering anything if the kind is already registered
    /// or if one of its literals was registered with different casing.
    pub fn register(&mut self, grammar: &'static Grammar) -> Result<&mut Self, RegistryError> {
        if self.grammars.iter().any(|g| g.kind() == grammar.kind()) {
            return Err(RegistryError::DuplicateKind(grammar.kind()));
        }

        for literal in grammar.literals() {
            if let Some(existing) = self.literals.get(&literal.to_ascii_lowercase()) {
                if existing.canonical != literal {
                    return Err(RegistryError::ConflictingCasing {
                        literal: literal.to_ascii_lowercase(),
                        existing: existing.canonical,
                        existing_kind: existing.kind,
                        incoming: literal,
                        incoming_kind: grammar.kind(),
                    });
                }
            }
        }

        for literal in grammar.literals() {
            self.literals
                .entry(literal.to_ascii_lowercase())
                .or_insert(LiteralEntry {
                    canonical: literal,
                    kind: grammar.kind(),
                });
        }
        self.grammars.push(grammar);
        Ok(self)
    }

    /// Registers every grammar in order, stopping at the first error.
    pub fn register_all<I>(&mut self, grammars: I) -> Result<&mut Self, RegistryError>
    where
        I: IntoIterator<Item = &'static Grammar>,
    {
        for grammar in grammars {
            self.register(grammar)?;
        }
        Ok(self)
    }

    /// Finishes registration.
    pub fn build(self) -> Recaser {
        debug!(
            kinds = self.grammars.len(),
            literals = self.literals.len(),
            "built identifier registry"
        );
        Recaser {
            grammars: self.grammars,
            literals: self.literals,
        }
    }
}

/// A read-only table of registered grammars and their canonical literals.
#[derive(Debug)]
pub struct Recaser {
    grammars: Vec<&'static Grammar>,
    literals: HashMap<String, LiteralEntry>,
}

impl Recaser {
    /// Creates a builder.
    pub fn builder() -> RecaserBuilder {
        RecaserBuilder::new()
    }

    /// Returns the canonical casing of a registered literal.
    pub fn recover_canonical_casing(&self, literal: &str) -> Result<&'static str, RegistryError> {
        self.literals
            .get(&literal.to_ascii_lowercase())
            .map(|entry| entry.canonical)
            .ok_or_else(|| RegistryError::NotFound(literal.to_string()))
    }

    /// Returns the grammar registered for an ID kind.
    pub fn grammar(&self, kind: &str) -> Option<&'static Grammar> {
        self.grammars.iter().copied().find(|g| g.kind() == kind)
    }

    /// Returns the first registered grammar that accepts `input` insensitively.
    pub fn find_grammar(&self, input: &str) -> Option<&'static Grammar> {
        self.grammars
            .iter()
            .copied()
            .find(|g| Parser::new(g).parse_insensitively(input).is_ok())
    }

    /// Re-cases an ID of unknown kind.
    ///
    /// If a registered grammar accepts the input insensitively, the ID is
    /// re-emitted in that grammar's canonical form. Otherwise only key
    /// positions of the `key/value` layout are re-cased: every even token, plus
    /// the provider namespace that follows `providers`. Value positions keep
    /// their casing even when they spell a registered literal.
    pub fn recase(&self, input: &str) -> String {
        for grammar in &self.grammars {
            if let Ok(result) = Parser::new(grammar).parse_insensitively(input) {
                return format_id(grammar, |segment| result.get(segment).ok());
            }
        }

        debug!(input, "no registered grammar matched; re-casing key segments");
        let (prefix, path) = match input.strip_prefix(SEPARATOR) {
            Some(rest) => (SEPARATOR.to_string(), rest),
            None => (String::new(), input),
        };
        let tokens: Vec<&str> = path.split(SEPARATOR).collect();
        let has_namespace = tokens
            .get(PROVIDERS_POSITION)
            .is_some_and(|token| token.eq_ignore_ascii_case(PROVIDERS));

        let recased: Vec<&str> = tokens
            .iter()
            .enumerate()
            .map(|(index, &token)| {
                let is_key = index % 2 == 0 || (has_namespace && index == PROVIDERS_POSITION + 1);
                if is_key {
                    self.recover_canonical_casing(token).unwrap_or(token)
                } else {
                    token
                }
            })
            .collect();
        prefix + &recased.join(&SEPARATOR.to_string())
    }

    /// Returns the registered ID kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.grammars.iter().map(|g| g.kind())
    }

    /// Returns the number of registered grammars.
    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    /// Returns true if no grammar is registered.
    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }
}

static GLOBAL: OnceLock<Recaser> = OnceLock::new();

/// Installs the process-wide recaser.
///
/// Must complete before the first call to [`global`] or [`recase`] that is
/// expected to see it. Only the first install succeeds.
pub fn install(recaser: Recaser) -> Result<&'static Recaser, RegistryError> {
    let mut installed = false;
    let global = GLOBAL.get_or_init(|| {
        installed = true;
        recaser
    });
    if installed {
        Ok(global)
    } else {
        Err(RegistryError::AlreadyInstalled)
    }
}

/// Returns the process-wide recaser, if one has been installed.
pub fn global() -> Option<&'static Recaser> {
    GLOBAL.get()
}

/// Re-cases an ID with the process-wide recaser.
///
/// Returns the input unchanged if no recaser is installed.
pub fn recase(input: &str) -> String {
    match global() {
        Some(recaser) => recaser.recase(input),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Segment;

    static CLUSTER: Grammar = Grammar::new(
        "Kubernetes Cluster",
        &[
            Segment::static_("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_("staticResourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName"),
            Segment::static_("staticProviders", "providers"),
            Segment::resource_provider("staticMicrosoftContainerService", "Microsoft.ContainerService"),
            Segment::static_("staticManagedClusters", "managedClusters"),
            Segment::user_specified("managedClusterName"),
        ],
    );

    static RESOURCE_GROUP: Grammar = Grammar::new(
        "Resource Group",
        &[
            Segment::static_("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_("staticResourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName"),
        ],
    );

    static CONFLICTING: Grammar = Grammar::new(
        "Conflicting",
        &[
            Segment::static_("staticResourceGroups", "resourcegroups"),
            Segment::resource_group("resourceGroupName"),
        ],
    );

    fn recaser() -> Recaser {
        let mut builder = Recaser::builder();
        builder.register_all([&CLUSTER, &RESOURCE_GROUP]).unwrap();
        builder.build()
    }

    #[test]
    fn test_recover_canonical_casing() {
        let recaser = recaser();
        assert_eq!(
            recaser.recover_canonical_casing("MICROSOFT.containerservice"),
            Ok("Microsoft.ContainerService")
        );
        assert_eq!(recaser.recover_canonical_casing("resourcegroups"), Ok("resourceGroups"));
    }

    #[test]
    fn test_recover_unknown_literal() {
        let err = recaser().recover_canonical_casing("virtualMachines").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_conflicting_casing_is_rejected() {
        let mut builder = Recaser::builder();
        builder.register(&RESOURCE_GROUP).unwrap();
        let err = builder.register(&CONFLICTING).unwrap_err();
        assert_eq!(
            err,
            RegistryError::ConflictingCasing {
                literal: "resourcegroups".to_string(),
                existing: "resourceGroups",
                existing_kind: "Resource Group",
                incoming: "resourcegroups",
                incoming_kind: "Conflicting",
            }
        );
        let recaser = builder.build();
        assert_eq!(recaser.len(), 1);
    }

    #[test]
    fn test_duplicate_kind_is_rejected() {
        let mut builder = Recaser::builder();
        builder.register(&CLUSTER).unwrap();
        assert_eq!(
            builder.register(&CLUSTER).unwrap_err(),
            RegistryError::DuplicateKind("Kubernetes Cluster")
        );
    }

    #[test]
    fn test_recase_matching_grammar() {
        let recaser = recaser();
        assert_eq!(
            recaser.recase(
                "/subscriptions/0000/resourcegroups/MyGroup/providers/Microsoft.ContainerService/ManagedClusters/aks1"
            ),
            "/subscriptions/0000/resourceGroups/MyGroup/providers/Microsoft.ContainerService/managedClusters/aks1"
        );
    }

    #[test]
    fn test_recase_falls_back_to_known_segments() {
        let recaser = recaser();
        assert_eq!(
            recaser.recase("/SUBSCRIPTIONS/0000/resourcegroups/MyGroup/providers/Microsoft.Network/virtualNetworks/vnet1"),
            "/subscriptions/0000/resourceGroups/MyGroup/providers/Microsoft.Network/virtualNetworks/vnet1"
        );
    }

    #[test]
    fn test_recase_fallback_keeps_values_that_spell_literals() {
        let recaser = recaser();
        assert_eq!(
            recaser.recase(
                "/subscriptions/0000/resourcegroups/ResourceGroups/providers/Microsoft.Network/MANAGEDCLUSTERS/Providers"
            ),
            "/subscriptions/0000/resourceGroups/ResourceGroups/providers/Microsoft.Network/managedClusters/Providers"
        );
        assert_eq!(
            recaser.recase("/subscriptions/0000/resourcegroups/managedclusters/providers/microsoft.containerservice/x/y/z"),
            "/subscriptions/0000/resourceGroups/managedclusters/providers/Microsoft.ContainerService/x/y/z"
        );
    }

    #[test]
    fn test_recase_fallback_keeps_slashes_as_given() {
        let recaser = recaser();
        assert_eq!(
            recaser.recase("subscriptions/Providers/RESOURCEGROUPS/Microsoft.ContainerService/PROVIDERS/"),
            "subscriptions/Providers/resourceGroups/Microsoft.ContainerService/providers/"
        );
    }

    #[test]
    fn test_find_grammar() {
        let recaser = recaser();
        let grammar = recaser.find_grammar("/subscriptions/0000/RESOURCEGROUPS/rg").unwrap();
        assert_eq!(grammar.kind(), "Resource Group");
        assert!(recaser.find_grammar("/nothing/here").is_none());
        assert_eq!(recaser.kinds().collect::<Vec<_>>(), vec!["Kubernetes Cluster", "Resource Group"]);
    }
}
