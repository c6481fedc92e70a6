//! Keyword fallback: exact-token-presence matching, used only when a
//! pattern's semantic score misses the acceptance threshold. This layer
//! catches exact-keyword phrasings the lexical scorer under-ranks; it is
//! deliberately strict so it never introduces fuzzier matches.

use std::collections::HashSet;

use crate::normalize::NormalizedQuery;

/// Fraction of the pattern's keywords present as whole tokens in the query.
/// A pattern with no keywords scores 0.0 — it has opted out of fallback.
pub fn keyword_score(query: &NormalizedQuery, keywords: &[String]) -> f64 {
    if keywords.is_empty() || query.is_empty() {
        return 0.0;
    }

    let tokens: HashSet<&str> = query.tokens.iter().map(String::as_str).collect();
    let present = keywords
        .iter()
        .filter(|k| tokens.contains(k.as_str()))
        .count();

    present as f64 / keywords.len() as f64
}

/// Only full keyword coverage qualifies as a fallback match; partial
/// coverage is discarded rather than weakly accepted.
pub fn qualifies(score: f64) -> bool {
    score >= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn all_keywords_present_scores_one() {
        let q = normalize("draft a response about the outage");
        let score = keyword_score(&q, &kw(&["draft", "response"]));
        assert_eq!(score, 1.0);
        assert!(qualifies(score));
    }

    #[test]
    fn partial_coverage_does_not_qualify() {
        let q = normalize("draft prep notes");
        let score = keyword_score(&q, &kw(&["draft", "response"]));
        assert_eq!(score, 0.5);
        assert!(!qualifies(score));
    }

    #[test]
    fn keywords_match_whole_tokens_not_substrings() {
        // "ticketref" as a token does not satisfy the "ticket" keyword
        // unless "ticket" itself is present.
        let q = normalize("#123");
        assert_eq!(keyword_score(&q, &kw(&["ticket"])), 0.0);
    }

    #[test]
    fn no_keywords_means_no_fallback() {
        let q = normalize("anything at all");
        assert_eq!(keyword_score(&q, &[]), 0.0);
    }

    #[test]
    fn empty_query_never_qualifies() {
        let q = normalize("   ");
        assert_eq!(keyword_score(&q, &kw(&["ticket"])), 0.0);
    }
}
