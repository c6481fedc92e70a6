//! Deterministic query intent router for the Switchboard support-chat demo.
//!
//! Free-text user input is normalized into a canonical token stream, ranked
//! against a persona/mode-scoped catalog of intent patterns, and resolved to
//! exactly one widget (or none). The whole pipeline is a pure, synchronous
//! computation over an immutable catalog — the same `(query, persona, mode)`
//! triple always produces the same result, and no step can fail at request
//! time. Catalog defects are rejected once, at construction.

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod normalize;
pub mod pattern;
pub mod resolve;
pub mod score;

pub use catalog::PatternCatalog;
pub use error::CatalogError;
pub use normalize::{NormalizedQuery, normalize};
pub use pattern::{IntentPattern, MatchMethod, PersonaProfile, Scope, WidgetType};
pub use resolve::{CandidateScore, QueryRouter, ResolvedQuery};
