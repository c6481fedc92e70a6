//! Lexical similarity between a normalized query and a pattern's canonical
//! phrases. Pure function of its inputs: no randomness, no external state,
//! no dependence on catalog iteration order.

use std::collections::HashSet;

use crate::normalize::NormalizedQuery;

/// Minimum effective score for a candidate to be surfaced at all.
pub const MATCH_THRESHOLD: f64 = 0.60;

/// Bonus when one side's fused text contains the other's whole text.
const CONTAINMENT_BONUS: f64 = 0.25;

/// Score one canonical phrase against the query: token-set Jaccard plus a
/// containment bonus, capped at 1.0. Exact normalized equality is a perfect
/// match.
pub fn phrase_score(query: &NormalizedQuery, phrase: &NormalizedQuery) -> f64 {
    if query.is_empty() || phrase.is_empty() {
        return 0.0;
    }
    if query.text == phrase.text {
        return 1.0;
    }

    let query_tokens: HashSet<&str> = query.tokens.iter().map(String::as_str).collect();
    let phrase_tokens: HashSet<&str> = phrase.tokens.iter().map(String::as_str).collect();

    let intersection = query_tokens.intersection(&phrase_tokens).count() as f64;
    let union = query_tokens.union(&phrase_tokens).count() as f64;
    let jaccard = intersection / union;

    let query_fused = query.fused();
    let phrase_fused = phrase.fused();
    let containment = if query_fused.contains(&phrase_fused) || phrase_fused.contains(&query_fused)
    {
        CONTAINMENT_BONUS
    } else {
        0.0
    };

    (jaccard + containment).min(1.0)
}

/// A pattern's semantic score is its best phrase score.
/// Returns the score and the index of the winning phrase.
pub fn semantic_score(query: &NormalizedQuery, phrases: &[NormalizedQuery]) -> (f64, Option<usize>) {
    let mut best = 0.0;
    let mut best_idx = None;
    for (idx, phrase) in phrases.iter().enumerate() {
        let score = phrase_score(query, phrase);
        if score > best {
            best = score;
            best_idx = Some(idx);
        }
    }
    (best, best_idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn exact_normalized_match_scores_one() {
        let q = normalize("Show me the contract status");
        let p = normalize("contract status");
        assert_eq!(phrase_score(&q, &p), 1.0);
    }

    #[test]
    fn partial_overlap_scores_jaccard() {
        let q = normalize("my current tickets");
        let p = normalize("my tickets");
        // {my, ticket} of {my, current, ticket}
        let score = phrase_score(&q, &p);
        assert!((score - 2.0 / 3.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn containment_bonus_lifts_substring_matches() {
        let q = normalize("chart");
        let p = normalize("sprint progress chart");
        // jaccard 1/3 + 0.25 containment
        let score = phrase_score(&q, &p);
        assert!((score - (1.0 / 3.0 + 0.25)).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn disjoint_token_sets_score_zero() {
        let q = normalize("asdkjhasdkjh");
        let p = normalize("contract status");
        assert_eq!(phrase_score(&q, &p), 0.0);
    }

    #[test]
    fn empty_query_scores_zero_against_everything() {
        let q = normalize("");
        let p = normalize("contract status");
        assert_eq!(phrase_score(&q, &p), 0.0);
    }

    #[test]
    fn score_is_deterministic() {
        let q = normalize("team workload this week");
        let p = normalize("team workload");
        let first = phrase_score(&q, &p);
        for _ in 0..10 {
            assert_eq!(phrase_score(&q, &p), first);
        }
    }

    #[test]
    fn best_phrase_wins_and_reports_index() {
        let q = normalize("vendor compliance");
        let phrases = vec![normalize("contract status"), normalize("vendor compliance")];
        let (score, idx) = semantic_score(&q, &phrases);
        assert_eq!(score, 1.0);
        assert_eq!(idx, Some(1));
    }
}
