//! The resolver: merges semantic and keyword-fallback candidates, applies
//! the acceptance threshold, and picks exactly one deterministic winner.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::catalog::{CompiledPattern, PatternCatalog};
use crate::error::CatalogError;
use crate::extract;
use crate::fallback;
use crate::normalize::{NormalizedQuery, normalize};
use crate::pattern::{MatchMethod, PersonaProfile, WidgetType};
use crate::score::{self, MATCH_THRESHOLD};

/// Result of a successful resolution: which widget to render, the canned
/// response, and any slots extracted from the raw query.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResolvedQuery {
    pub widget_type: WidgetType,
    pub response_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_data: Option<Value>,
}

/// One scored candidate, as surfaced by [`QueryRouter::explain`]. Mirrors
/// what the resolver saw, in the order it ranked them.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CandidateScore {
    pub pattern_id: String,
    pub widget_type: WidgetType,
    /// Effective score: max of semantic and qualifying keyword score.
    pub score: f64,
    pub method: MatchMethod,
    pub priority: i32,
    /// The canonical phrase that produced the semantic score, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_phrase: Option<String>,
    /// Levenshtein distance between the normalized query and the best
    /// phrase. Diagnostic only — it does not participate in scoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_distance: Option<usize>,
}

struct RankedCandidate<'a> {
    compiled: &'a CompiledPattern,
    score: f64,
    method: MatchMethod,
    best_phrase: Option<usize>,
}

/// The router: an immutable catalog plus the resolution pipeline. Cheap to
/// share behind an `Arc`; resolution touches no mutable state.
#[derive(Debug, Clone)]
pub struct QueryRouter {
    catalog: PatternCatalog,
}

impl QueryRouter {
    pub fn new(catalog: PatternCatalog) -> Self {
        Self { catalog }
    }

    /// Router over the shipped demo catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        let (patterns, personas) = crate::builtin::definitions();
        Ok(Self::new(PatternCatalog::new(patterns, personas)?))
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn persona(&self, id: &str) -> Option<&PersonaProfile> {
        self.catalog.persona(id)
    }

    /// Resolve a raw query for a persona/mode pair.
    ///
    /// Every no-match path — empty query, unknown persona or mode, nothing
    /// above the threshold — funnels to `None`; callers treat that as a
    /// normal conversational branch, not an error.
    pub fn detect_widget_query(
        &self,
        query: &str,
        persona_id: &str,
        mode: &str,
    ) -> Option<ResolvedQuery> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return None;
        }

        let mut ranked = self.rank(&normalized, persona_id, mode);
        if ranked.is_empty() {
            tracing::debug!(persona_id, mode, query, "no pattern cleared the threshold");
            return None;
        }
        let winner = ranked.remove(0);

        tracing::debug!(
            persona_id,
            mode,
            query,
            pattern_id = %winner.compiled.pattern.id,
            widget_type = %winner.compiled.pattern.widget_type,
            score = winner.score,
            method = ?winner.method,
            "resolved widget query"
        );

        let widget_type = winner.compiled.pattern.widget_type.clone();
        let widget_data = extract::widget_data(&widget_type, query);
        Some(ResolvedQuery {
            widget_type,
            response_text: winner.compiled.pattern.response_template.clone(),
            widget_data,
        })
    }

    /// Full ranked candidate list for a query, including near misses'
    /// diagnostics. Used by the explain endpoint and by tests; resolution
    /// itself only looks at the head.
    pub fn explain(&self, query: &str, persona_id: &str, mode: &str) -> Vec<CandidateScore> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return Vec::new();
        }

        self.rank(&normalized, persona_id, mode)
            .into_iter()
            .map(|c| {
                let best_phrase = c
                    .best_phrase
                    .map(|idx| c.compiled.pattern.canonical_phrases[idx].clone());
                let edit_distance = c
                    .best_phrase
                    .map(|idx| strsim::levenshtein(&normalized.text, &c.compiled.phrases[idx].text));
                CandidateScore {
                    pattern_id: c.compiled.pattern.id.clone(),
                    widget_type: c.compiled.pattern.widget_type.clone(),
                    score: c.score,
                    method: c.method,
                    priority: c.compiled.pattern.priority,
                    best_phrase,
                    edit_distance,
                }
            })
            .collect()
    }

    /// Score every reachable pattern and sort by the strict total order
    /// (effective score desc, priority desc, registration order asc).
    fn rank<'a>(
        &'a self,
        normalized: &NormalizedQuery,
        persona_id: &str,
        mode: &str,
    ) -> Vec<RankedCandidate<'a>> {
        let mut candidates = Vec::new();

        for compiled in self.catalog.candidates(persona_id, mode) {
            let (semantic, best_phrase) = score::semantic_score(normalized, &compiled.phrases);

            let (effective, method) = if semantic >= MATCH_THRESHOLD {
                (semantic, MatchMethod::Semantic)
            } else {
                let keyword = fallback::keyword_score(normalized, &compiled.pattern.keywords);
                if fallback::qualifies(keyword) {
                    (keyword, MatchMethod::Keyword)
                } else {
                    continue;
                }
            };

            candidates.push(RankedCandidate {
                compiled,
                score: effective,
                method,
                best_phrase,
            });
        }

        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.compiled.pattern.priority.cmp(&a.compiled.pattern.priority))
                .then_with(|| a.compiled.index.cmp(&b.compiled.index))
        });
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{IntentPattern, Scope};

    fn pattern(id: &str, widget: &str, phrases: &[&str], keywords: &[&str]) -> IntentPattern {
        IntentPattern {
            id: id.to_string(),
            widget_type: WidgetType::from(widget),
            canonical_phrases: phrases.iter().map(|p| p.to_string()).collect(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            personas: Scope::All,
            modes: Scope::All,
            priority: 50,
            response_template: format!("response for {id}"),
        }
    }

    fn persona(id: &str, mode: &str) -> PersonaProfile {
        PersonaProfile {
            id: id.to_string(),
            mode: mode.to_string(),
            display_name: id.to_string(),
        }
    }

    fn router(patterns: Vec<IntentPattern>) -> QueryRouter {
        QueryRouter::new(
            PatternCatalog::new(patterns, vec![persona("agent", "support")])
                .expect("test catalog should build"),
        )
    }

    #[test]
    fn empty_query_resolves_to_none() {
        let r = router(vec![pattern("a", "w-a", &["alpha"], &[])]);
        assert!(r.detect_widget_query("", "agent", "support").is_none());
        assert!(r.detect_widget_query("   ", "agent", "support").is_none());
    }

    #[test]
    fn unknown_persona_resolves_to_none() {
        let r = router(vec![pattern("a", "w-a", &["alpha"], &[])]);
        assert!(r.detect_widget_query("alpha", "nobody", "support").is_none());
    }

    #[test]
    fn below_threshold_resolves_to_none() {
        let r = router(vec![pattern("a", "w-a", &["alpha beta gamma delta"], &[])]);
        // One of four tokens shared: jaccard 0.25, no containment.
        assert!(r.detect_widget_query("alpha epsilon", "agent", "support").is_none());
    }

    #[test]
    fn single_candidate_above_threshold_wins() {
        let r = router(vec![pattern("a", "w-a", &["contract status"], &[])]);
        let resolved = r
            .detect_widget_query("Show me the contract status", "agent", "support")
            .expect("should resolve");
        assert_eq!(resolved.widget_type.as_str(), "w-a");
        assert_eq!(resolved.response_text, "response for a");
    }

    #[test]
    fn keyword_fallback_recovers_missed_semantic_matches() {
        let r = router(vec![pattern(
            "a",
            "w-a",
            &["deliverable reviews"],
            &["deliverablereview"],
        )]);
        // Extra tokens drown the jaccard score, but the keyword is present.
        let resolved = r
            .detect_widget_query(
                "deliverable review status for last quarter overall",
                "agent",
                "support",
            )
            .expect("fallback should recover this");
        assert_eq!(resolved.widget_type.as_str(), "w-a");
    }

    #[test]
    fn partial_keyword_coverage_is_discarded() {
        let r = router(vec![pattern("a", "w-a", &["zzz"], &["contract", "status"])]);
        assert!(r
            .detect_widget_query("contract questions overall today", "agent", "support")
            .is_none());
    }

    #[test]
    fn equal_scores_resolve_by_priority() {
        let mut low = pattern("low", "w-low", &["alpha"], &[]);
        low.priority = 10;
        let mut high = pattern("high", "w-high", &["alpha"], &[]);
        high.priority = 90;

        // Lower priority registered first; priority must still win.
        let r = router(vec![low, high]);
        let resolved = r
            .detect_widget_query("alpha", "agent", "support")
            .expect("should resolve");
        assert_eq!(resolved.widget_type.as_str(), "w-high");
    }

    #[test]
    fn equal_score_and_priority_resolve_by_registration_order() {
        let r = router(vec![
            pattern("first", "w-first", &["alpha"], &[]),
            pattern("second", "w-second", &["alpha"], &[]),
        ]);
        let resolved = r
            .detect_widget_query("alpha", "agent", "support")
            .expect("should resolve");
        assert_eq!(resolved.widget_type.as_str(), "w-first");
    }

    #[test]
    fn resolution_is_deterministic_across_calls() {
        let r = router(vec![
            pattern("a", "w-a", &["team workload"], &["teamworkload"]),
            pattern("b", "w-b", &["team velocity"], &["teamvelocity"]),
        ]);
        let first = r
            .detect_widget_query("team workload", "agent", "support")
            .expect("should resolve");
        for _ in 0..20 {
            let again = r
                .detect_widget_query("team workload", "agent", "support")
                .expect("should resolve");
            assert_eq!(again.widget_type, first.widget_type);
            assert_eq!(again.response_text, first.response_text);
        }
    }

    #[test]
    fn explain_ranks_all_qualifying_candidates() {
        let r = router(vec![
            pattern("a", "w-a", &["contract status"], &[]),
            pattern("b", "w-b", &["contract performance report"], &[]),
        ]);
        let scores = r.explain("contract status", "agent", "support");
        assert_eq!(scores.len(), 1, "only the qualifying candidate is ranked");
        assert_eq!(scores[0].pattern_id, "a");
        assert_eq!(scores[0].score, 1.0);
        assert_eq!(scores[0].method, MatchMethod::Semantic);
        assert_eq!(scores[0].best_phrase.as_deref(), Some("contract status"));
        assert_eq!(scores[0].edit_distance, Some(0));
    }

    #[test]
    fn explain_for_empty_query_is_empty() {
        let r = router(vec![pattern("a", "w-a", &["alpha"], &[])]);
        assert!(r.explain("", "agent", "support").is_empty());
    }
}
