use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Catalog construction failures. These are configuration defects and are
/// rejected when the catalog is built, never during query resolution.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate pattern id '{id}'")]
    DuplicatePatternId { id: String },

    #[error("pattern '{id}' has no canonical phrases and no keywords — it can never match")]
    NoMatchSurface { id: String },

    #[error("pattern '{id}' has an empty canonical phrase")]
    EmptyPhrase { id: String },

    #[error("pattern '{id}' canonical phrase '{phrase}' normalizes to nothing and can never match")]
    UnmatchablePhrase { id: String, phrase: String },

    #[error("pattern '{id}' has an empty keyword")]
    EmptyKeyword { id: String },

    #[error("duplicate persona id '{id}'")]
    DuplicatePersona { id: String },
}

/// Structured error body returned by the HTTP surface.
/// Kept small: the router itself has no request-time failure modes, so the
/// API only ever reports bad request parameters or startup defects.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    /// Machine-readable error code (e.g. "validation_failed")
    pub error: String,
    /// Human-readable description of what went wrong
    pub message: String,
    /// Which query parameter caused the error (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Hint about what the correct usage looks like
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_hint: Option<String>,
}

/// Error codes used across the API
pub mod codes {
    pub const VALIDATION_FAILED: &str = "validation_failed";
    pub const INTERNAL_ERROR: &str = "internal_error";
}
