use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use switchboard_core::error::{self, ApiError};

/// Internal error type that converts to structured API responses.
///
/// Query resolution itself never fails — an unmatched query is a normal
/// `null` result — so the only error surface is bad request parameters.
#[derive(Debug)]
pub enum AppError {
    /// Validation error (400)
    Validation {
        message: String,
        field: Option<String>,
        docs_hint: Option<String>,
    },
    /// Internal error (500)
    Internal(String),
}

impl AppError {
    pub fn missing_param(field: &str) -> Self {
        AppError::Validation {
            message: format!("Missing required query parameter '{field}'"),
            field: Some(field.to_string()),
            docs_hint: Some(
                "Call /api/test-query?persona=<persona-id>&query=<text>. \
                 See /swagger-ui for the full parameter list."
                    .to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, api_error) = match self {
            AppError::Validation {
                message,
                field,
                docs_hint,
            } => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    error: error::codes::VALIDATION_FAILED.to_string(),
                    message,
                    field,
                    docs_hint,
                },
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError {
                        error: error::codes::INTERNAL_ERROR.to_string(),
                        message: "An internal error occurred".to_string(),
                        field: None,
                        docs_hint: None,
                    },
                )
            }
        };

        (status, Json(api_error)).into_response()
    }
}
