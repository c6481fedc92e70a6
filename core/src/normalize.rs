//! Query normalization: lowercasing, punctuation and filler stripping,
//! reference folding, compound folding, token canonicalization.
//!
//! Both user queries and catalog phrases go through the same pipeline, so a
//! pattern author writes natural phrasings ("show me the sprint burn-down")
//! and matching happens in canonical token space.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Words removed from the token stream because they carry no intent signal.
/// Deliberately excludes "show", "me" and "my" — those disambiguate personal
/// widgets ("my dashboard") from team-level ones.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall",
    "can", "need", "dare", "to", "of", "in", "for", "on", "with", "at", "by", "from", "as",
    "into", "through", "during", "before", "after", "above", "below", "between", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own",
    "same", "so", "than", "too", "very", "just", "and", "but", "if", "or", "because", "until",
    "while", "please", "display", "give", "get", "what", "i", "we", "our", "you", "your",
];

/// Leading filler phrases stripped before tokenization. Longest first; the
/// strip repeats, so "please show me the X" reduces to "X".
const FILLER_PREFIXES: &[&str] = &[
    "can you show me",
    "can you show",
    "i want to see",
    "i want to",
    "show me the",
    "show me",
    "show",
    "what is the",
    "what is",
    "display the",
    "display",
    "give me",
    "open the",
    "open",
    "please",
];

/// Abbreviations and plural variants folded to one canonical token.
static WORD_NORMALIZATIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("tix", "ticket"),
        ("tickets", "ticket"),
        ("dash", "dashboard"),
        ("perf", "performance"),
        ("perfs", "performance"),
        ("stat", "status"),
        ("stats", "status"),
        ("kpi", "metric"),
        ("kpis", "metric"),
        ("metrics", "metric"),
        ("kb", "knowledge"),
        ("load", "workload"),
        ("iteration", "sprint"),
        ("cycle", "sprint"),
        ("spending", "budget"),
        ("expenditure", "budget"),
        ("costs", "budget"),
        ("financials", "budget"),
        ("teams", "team"),
        ("tasks", "task"),
        ("systems", "system"),
        ("customers", "customer"),
        ("blockers", "blocker"),
    ])
});

/// Multi-word domain terms folded into a single token so that "sprint
/// burn-down" and "sprint burndown" land on the same canonical form. Keys are
/// surface token sequences (longest n-gram tried first, greedy left-to-right);
/// plural variants are listed explicitly.
static COMPOUND_WORDS: LazyLock<HashMap<&'static [&'static str], &'static str>> =
    LazyLock::new(|| {
        const TABLE: &[(&[&str], &str)] = &[
            (&["sprint", "burn", "down"], "sprintburndown"),
            (&["sprint", "burndown"], "sprintburndown"),
            (&["burn", "down"], "burndown"),
            (&["top", "performers"], "topperformers"),
            (&["bottom", "performers"], "bottomperformers"),
            (&["team", "workload"], "teamworkload"),
            (&["team", "status"], "teamstatus"),
            (&["team", "velocity"], "teamvelocity"),
            (&["code", "quality"], "codequality"),
            (&["technical", "debt"], "technicaldebt"),
            (&["tech", "debt"], "technicaldebt"),
            (&["test", "coverage"], "testcoverage"),
            (&["pull", "requests"], "pullrequest"),
            (&["pull", "request"], "pullrequest"),
            (&["customer", "risk"], "customerrisk"),
            (&["churn", "risk"], "churnrisk"),
            (&["at", "risk"], "atrisk"),
            (&["risk", "analysis"], "riskanalysis"),
            (&["contract", "performance"], "contractperformance"),
            (&["vendor", "compliance"], "vendorcompliance"),
            (&["deliverable", "reviews"], "deliverablereview"),
            (&["deliverable", "review"], "deliverablereview"),
            (&["program", "health"], "programhealth"),
            (&["stakeholder", "engagement"], "stakeholderengagement"),
            (&["requirements", "tracking"], "requirementstracking"),
            (&["change", "requests"], "changerequest"),
            (&["change", "request"], "changerequest"),
            (&["resource", "capacity"], "resourcecapacity"),
            (&["resource", "allocation"], "resourceallocation"),
            (&["deployment", "pipeline"], "deploymentpipeline"),
            (&["blocker", "resolution"], "blockerresolution"),
            (&["task", "kanban"], "taskkanban"),
            (&["kanban", "board"], "kanbanboard"),
            (&["executive", "summary"], "executivesummary"),
            (&["analytics", "dashboard"], "analyticsdashboard"),
            (&["knowledge", "base"], "knowledgebase"),
            (&["knowledge", "article"], "knowledgearticle"),
            (&["password", "reset"], "passwordreset"),
            (&["call", "prep"], "callprep"),
            (&["call", "preparation"], "callprep"),
            (&["similar", "tickets"], "similartickets"),
            (&["my", "performance"], "myperformance"),
            (&["my", "stats"], "mystats"),
            (&["my", "dashboard"], "mydashboard"),
            (&["daily", "update"], "dailyupdate"),
            (&["business", "review"], "businessreview"),
            (&["product", "adoption"], "productadoption"),
            (&["sentiment", "analysis"], "sentimentanalysis"),
            (&["sla", "performance"], "slaperformance"),
            (&["sla", "compliance"], "slacompliance"),
            (&["dora", "metrics"], "dorametrics"),
            (&["zoho", "tickets"], "zohotickets"),
            (&["zoho", "desk"], "zohodesk"),
            (&["end", "user"], "enduser"),
            (&["agent", "performance"], "agentperformance"),
            (&["customer", "health"], "customerhealth"),
            (&["client", "health"], "customerhealth"),
        ];
        TABLE.iter().copied().collect()
    });

/// Ticket references: "TICK-001", "#123", "ticket 456" all fold to a
/// `ticketref` token so one pattern covers every spelling. Runs on the
/// hyphen-folded lowercase string, before tokenization.
static TICK_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\btick ?\d+\b").expect("valid ticket key regex"));
static TICK_HASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\d+\b").expect("valid ticket hash regex"));
static TICK_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bticket \d+\b").expect("valid ticket word regex"));

/// KB article references: "KB-107", "kb 456", "kb892" fold to `kbref`.
static KB_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bkb ?\d+\b").expect("valid kb ref regex"));

/// A query (or canonical phrase) in canonical token form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Tokens joined by single spaces.
    pub text: String,
    pub tokens: Vec<String>,
}

impl NormalizedQuery {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Normalized text with spaces removed, used for containment checks.
    pub fn fused(&self) -> String {
        self.tokens.concat()
    }
}

/// Normalize raw user text into a canonical token sequence. Never fails;
/// empty or all-filler input yields an empty token list, which downstream
/// components treat as "no match possible".
pub fn normalize(text: &str) -> NormalizedQuery {
    let mut s = text.to_lowercase().replace('-', " ");

    s = strip_filler_prefixes(&s);
    s = TICK_KEY_RE.replace_all(&s, "ticketref").into_owned();
    s = TICK_HASH_RE.replace_all(&s, "ticketref").into_owned();
    s = TICK_WORD_RE.replace_all(&s, "ticket ticketref").into_owned();
    s = KB_REF_RE.replace_all(&s, "kbref").into_owned();

    let raw_tokens: Vec<String> = s
        .split_whitespace()
        .map(|t| t.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|t| !t.is_empty())
        .collect();

    let folded = fold_compounds(&raw_tokens);

    let tokens: Vec<String> = folded
        .into_iter()
        .map(|t| match WORD_NORMALIZATIONS.get(t.as_str()) {
            Some(canonical) => (*canonical).to_string(),
            None => t,
        })
        .filter(|t| !STOP_WORDS.contains(&t.as_str()))
        .collect();

    NormalizedQuery {
        text: tokens.join(" "),
        tokens,
    }
}

fn strip_filler_prefixes(input: &str) -> String {
    let mut s = input.trim_start();
    'outer: loop {
        for filler in FILLER_PREFIXES {
            if let Some(rest) = s.strip_prefix(filler) {
                // Must end at a word boundary so "showcase" survives.
                if rest.is_empty() || rest.starts_with(|c: char| !c.is_alphanumeric()) {
                    s = rest.trim_start();
                    continue 'outer;
                }
            }
        }
        break;
    }
    s.to_string()
}

/// Greedy left-to-right compound folding: at each position try the trigram,
/// then the bigram, then keep the single token.
fn fold_compounds(tokens: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let mut folded = None;
        for len in (2..=3).rev() {
            if i + len > tokens.len() {
                continue;
            }
            let window: Vec<&str> = tokens[i..i + len].iter().map(String::as_str).collect();
            if let Some(compound) = COMPOUND_WORDS.get(window.as_slice()) {
                folded = Some(((*compound).to_string(), len));
                break;
            }
        }
        match folded {
            Some((compound, len)) => {
                out.push(compound);
                i += len;
            }
            None => {
                out.push(tokens[i].clone());
                i += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        normalize(text).tokens
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(tokens("Contract Status!"), ["contract", "status"]);
        assert_eq!(tokens("  contract   status  "), ["contract", "status"]);
    }

    #[test]
    fn strips_leading_filler_phrases() {
        assert_eq!(tokens("Show me the contract status"), ["contract", "status"]);
        assert_eq!(tokens("Please show me the contract status"), ["contract", "status"]);
        assert_eq!(tokens("contract status"), ["contract", "status"]);
    }

    #[test]
    fn filler_stripping_requires_word_boundary() {
        assert_eq!(tokens("showcase results"), ["showcase", "results"]);
    }

    #[test]
    fn empty_and_whitespace_input_normalize_to_nothing() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize("show me the").is_empty());
    }

    #[test]
    fn folds_compound_terms_across_spellings() {
        assert_eq!(tokens("sprint burndown"), ["sprintburndown"]);
        assert_eq!(tokens("sprint burn down"), ["sprintburndown"]);
        assert_eq!(tokens("sprint burn-down"), ["sprintburndown"]);
        assert_eq!(tokens("burn down chart"), ["burndown", "chart"]);
    }

    #[test]
    fn folds_ticket_references() {
        assert_eq!(tokens("Show ticket TICK-001"), ["ticket", "ticketref"]);
        assert_eq!(tokens("Show me ticket #123"), ["ticket", "ticketref"]);
        assert_eq!(tokens("ticket 456"), ["ticket", "ticketref"]);
    }

    #[test]
    fn folds_kb_references() {
        assert_eq!(tokens("Open KB-107"), ["kbref"]);
        assert_eq!(tokens("open kb 456"), ["kbref"]);
        assert_eq!(tokens("kb892"), ["kbref"]);
    }

    #[test]
    fn canonicalizes_abbreviations_and_plurals() {
        assert_eq!(tokens("my tix"), ["my", "ticket"]);
        assert_eq!(tokens("kpis"), ["metric"]);
        assert_eq!(tokens("search kb"), ["search", "knowledge"]);
    }

    #[test]
    fn removes_stop_words_but_keeps_personal_markers() {
        assert_eq!(tokens("who are my top performers"), ["who", "my", "topperformers"]);
        assert_eq!(tokens("the a an is are"), Vec::<String>::new());
    }

    #[test]
    fn compound_folding_is_word_boundary_safe() {
        // "that risk" must not fold via the "at risk" compound.
        assert_eq!(tokens("that risk"), ["that", "risk"]);
        assert_eq!(tokens("customers at risk"), ["customer", "atrisk"]);
    }

    #[test]
    fn fused_concatenates_tokens() {
        assert_eq!(normalize("contract status").fused(), "contractstatus");
    }
}
