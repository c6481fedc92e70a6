//! The pattern catalog: built once at startup from static definitions,
//! validated eagerly, immutable afterwards. Shared read-only across
//! concurrent resolutions (callers hold it behind an `Arc`); hot reload, if
//! ever added, must swap the whole catalog pointer atomically.

use std::collections::{BTreeMap, HashSet};

use crate::error::CatalogError;
use crate::normalize::{NormalizedQuery, normalize};
use crate::pattern::{IntentPattern, PersonaProfile};

/// A pattern with its phrases pre-normalized and its registration index
/// recorded. The index is the final tie-break: first registered wins.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub pattern: IntentPattern,
    pub phrases: Vec<NormalizedQuery>,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<CompiledPattern>,
    personas: BTreeMap<String, PersonaProfile>,
}

impl PatternCatalog {
    /// Build and validate the catalog. Malformed pattern data is a
    /// configuration defect and is rejected here, never at request time.
    pub fn new(
        patterns: Vec<IntentPattern>,
        personas: Vec<PersonaProfile>,
    ) -> Result<Self, CatalogError> {
        let mut seen_ids = HashSet::new();
        let mut compiled = Vec::with_capacity(patterns.len());

        for (index, pattern) in patterns.into_iter().enumerate() {
            if !seen_ids.insert(pattern.id.clone()) {
                return Err(CatalogError::DuplicatePatternId { id: pattern.id });
            }
            if pattern.canonical_phrases.is_empty() && pattern.keywords.is_empty() {
                return Err(CatalogError::NoMatchSurface { id: pattern.id });
            }
            if pattern.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(CatalogError::EmptyKeyword { id: pattern.id });
            }

            let mut phrases = Vec::with_capacity(pattern.canonical_phrases.len());
            for phrase in &pattern.canonical_phrases {
                if phrase.trim().is_empty() {
                    return Err(CatalogError::EmptyPhrase { id: pattern.id });
                }
                let normalized = normalize(phrase);
                if normalized.is_empty() {
                    return Err(CatalogError::UnmatchablePhrase {
                        id: pattern.id,
                        phrase: phrase.clone(),
                    });
                }
                phrases.push(normalized);
            }

            compiled.push(CompiledPattern {
                pattern,
                phrases,
                index,
            });
        }

        let mut directory = BTreeMap::new();
        for profile in personas {
            if directory.contains_key(&profile.id) {
                return Err(CatalogError::DuplicatePersona { id: profile.id });
            }
            directory.insert(profile.id.clone(), profile);
        }

        Ok(Self {
            patterns: compiled,
            personas: directory,
        })
    }

    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    pub fn persona(&self, id: &str) -> Option<&PersonaProfile> {
        self.personas.get(id)
    }

    pub fn personas(&self) -> impl Iterator<Item = &PersonaProfile> {
        self.personas.values()
    }

    /// Narrow the catalog to patterns reachable by this caller. An unknown
    /// persona yields an empty candidate set — `Scope::All` patterns never
    /// leak to identities the directory does not know about — so bad input
    /// from the UI layer degrades to "no match" instead of an error.
    pub fn candidates(&self, persona_id: &str, mode: &str) -> Vec<&CompiledPattern> {
        if !self.personas.contains_key(persona_id) {
            return Vec::new();
        }
        self.patterns
            .iter()
            .filter(|cp| {
                cp.pattern.personas.matches(persona_id) && cp.pattern.modes.matches(mode)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{Scope, WidgetType};

    fn pattern(id: &str, phrases: &[&str], keywords: &[&str]) -> IntentPattern {
        IntentPattern {
            id: id.to_string(),
            widget_type: WidgetType::from("test-widget"),
            canonical_phrases: phrases.iter().map(|p| p.to_string()).collect(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            personas: Scope::All,
            modes: Scope::All,
            priority: 50,
            response_template: "ok".to_string(),
        }
    }

    fn persona(id: &str, mode: &str) -> PersonaProfile {
        PersonaProfile {
            id: id.to_string(),
            mode: mode.to_string(),
            display_name: id.to_string(),
        }
    }

    #[test]
    fn builds_and_preserves_registration_order() {
        let catalog = PatternCatalog::new(
            vec![pattern("a", &["alpha"], &[]), pattern("b", &["beta"], &[])],
            vec![persona("cor", "government")],
        )
        .expect("catalog should build");

        assert_eq!(catalog.patterns()[0].pattern.id, "a");
        assert_eq!(catalog.patterns()[0].index, 0);
        assert_eq!(catalog.patterns()[1].index, 1);
    }

    #[test]
    fn rejects_duplicate_pattern_ids() {
        let err = PatternCatalog::new(
            vec![pattern("a", &["alpha"], &[]), pattern("a", &["beta"], &[])],
            vec![],
        )
        .expect_err("duplicate id must fail");
        assert!(matches!(err, CatalogError::DuplicatePatternId { id } if id == "a"));
    }

    #[test]
    fn rejects_pattern_with_no_match_surface() {
        let err = PatternCatalog::new(vec![pattern("a", &[], &[])], vec![])
            .expect_err("empty pattern must fail");
        assert!(matches!(err, CatalogError::NoMatchSurface { .. }));
    }

    #[test]
    fn rejects_phrase_that_normalizes_to_nothing() {
        let err = PatternCatalog::new(vec![pattern("a", &["show me the"], &[])], vec![])
            .expect_err("all-filler phrase must fail");
        assert!(matches!(err, CatalogError::UnmatchablePhrase { .. }));
    }

    #[test]
    fn unknown_persona_yields_no_candidates() {
        let catalog = PatternCatalog::new(
            vec![pattern("a", &["alpha"], &[])],
            vec![persona("cor", "government")],
        )
        .expect("catalog should build");

        assert!(catalog.candidates("nobody", "government").is_empty());
        assert_eq!(catalog.candidates("cor", "government").len(), 1);
    }

    #[test]
    fn scoped_patterns_filter_on_persona_and_mode() {
        let mut scoped = pattern("gov-only", &["alpha"], &[]);
        scoped.personas = Scope::only(["cor"]);
        scoped.modes = Scope::only(["government"]);

        let catalog = PatternCatalog::new(
            vec![scoped],
            vec![persona("cor", "government"), persona("pm", "project")],
        )
        .expect("catalog should build");

        assert_eq!(catalog.candidates("cor", "government").len(), 1);
        assert!(catalog.candidates("cor", "project").is_empty());
        assert!(catalog.candidates("pm", "project").is_empty());
    }
}
