use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

/// Identifier of the UI panel rendered for a matched intent.
///
/// Widget types are a free-form string, NOT an enum — new widgets are added
/// by registering patterns, never by changing router code. The router only
/// carries the identifier through; it never branches on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(transparent)]
pub struct WidgetType(String);

impl WidgetType {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WidgetType {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persona or mode applicability of a pattern. The `All` sentinel is explicit
/// so that "applies everywhere" is a deliberate choice, not a missing list.
#[derive(Debug, Clone)]
pub enum Scope {
    All,
    Only(BTreeSet<String>),
}

impl Scope {
    /// Build a scope from a fixed id list.
    pub fn only<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Scope::Only(ids.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, id: &str) -> bool {
        match self {
            Scope::All => true,
            Scope::Only(ids) => ids.contains(id),
        }
    }
}

/// A single intent pattern: the phrasings and keywords that map a user query
/// to one widget, scoped to the personas and modes allowed to reach it.
///
/// Patterns are static data. Registration order is preserved by the catalog
/// and acts as the final deterministic tie-break when priorities are equal.
#[derive(Debug, Clone)]
pub struct IntentPattern {
    /// Stable unique identifier.
    pub id: String,
    /// Widget rendered when this pattern wins.
    pub widget_type: WidgetType,
    /// Reference utterances for similarity scoring. Compared in normalized
    /// form; the best-scoring phrase is the pattern's semantic score.
    pub canonical_phrases: Vec<String>,
    /// Canonical tokens for the keyword fallback. A fallback match requires
    /// every keyword to be present as a whole token.
    pub keywords: Vec<String>,
    pub personas: Scope,
    pub modes: Scope,
    /// Higher wins ties at equal effective score. Always explicit.
    pub priority: i32,
    /// Canned response text returned alongside the widget.
    pub response_template: String,
}

/// Read-only persona identity. Used only to scope the catalog; the router
/// never mutates profiles.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PersonaProfile {
    pub id: String,
    /// Operating context this persona belongs to (e.g. "government",
    /// "project", "atc").
    pub mode: String,
    pub display_name: String,
}

/// How a candidate cleared the acceptance threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    Semantic,
    Keyword,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_all_matches_everything() {
        assert!(Scope::All.matches("cor"));
        assert!(Scope::All.matches(""));
    }

    #[test]
    fn scope_only_matches_listed_ids() {
        let scope = Scope::only(["cor", "program-manager"]);
        assert!(scope.matches("cor"));
        assert!(!scope.matches("atc-support"));
    }

    #[test]
    fn widget_type_round_trips_as_string() {
        let w = WidgetType::from("ticket-detail");
        assert_eq!(w.as_str(), "ticket-detail");
        assert_eq!(w.to_string(), "ticket-detail");
    }
}
