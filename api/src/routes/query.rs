use axum::extract::{Query, State};
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use switchboard_core::pattern::WidgetType;
use switchboard_core::resolve::CandidateScore;

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/test-query", get(test_query))
        .route("/api/test-query/explain", get(explain_query))
}

/// Both parameters are optional at the extractor level so missing ones
/// produce a structured 400 instead of axum's default rejection.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct TestQueryParams {
    /// Persona id, e.g. "cor" or "atc-support"
    pub persona: Option<String>,
    /// Raw user query text
    pub query: Option<String>,
    /// Operating mode override; defaults to the persona's own mode
    pub mode: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestQueryResponse {
    pub persona: String,
    pub mode: String,
    pub query: String,
    /// `null` when no pattern cleared the threshold
    pub widget_type: Option<WidgetType>,
    pub response_text: Option<String>,
    pub has_widget_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_data: Option<Value>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExplainQueryResponse {
    pub persona: String,
    pub mode: String,
    pub query: String,
    /// Every qualifying candidate in resolution order; the head is the winner
    pub candidates: Vec<CandidateScore>,
}

fn require(params: &TestQueryParams) -> Result<(String, String), AppError> {
    let persona = params
        .persona
        .clone()
        .ok_or_else(|| AppError::missing_param("persona"))?;
    let query = params
        .query
        .clone()
        .ok_or_else(|| AppError::missing_param("query"))?;
    Ok((persona, query))
}

/// An explicit mode wins; otherwise the persona's directory mode. Unknown
/// personas get an empty mode, which resolves to no match downstream.
fn effective_mode(state: &AppState, persona: &str, mode: Option<&str>) -> String {
    match mode {
        Some(m) => m.to_string(),
        None => state
            .router
            .persona(persona)
            .map(|p| p.mode.clone())
            .unwrap_or_default(),
    }
}

/// Resolve a query the way the chat surface would: one widget or nothing.
#[utoipa::path(
    get,
    path = "/api/test-query",
    params(TestQueryParams),
    responses(
        (status = 200, description = "Resolution result; widgetType is null when nothing matched", body = TestQueryResponse),
        (status = 400, description = "Missing persona or query parameter", body = switchboard_core::error::ApiError)
    ),
    tag = "routing"
)]
pub async fn test_query(
    State(state): State<AppState>,
    Query(params): Query<TestQueryParams>,
) -> Result<Json<TestQueryResponse>, AppError> {
    let (persona, query) = require(&params)?;
    let mode = effective_mode(&state, &persona, params.mode.as_deref());

    let resolved = state.router.detect_widget_query(&query, &persona, &mode);
    let (widget_type, response_text, widget_data) = match resolved {
        Some(r) => (Some(r.widget_type), Some(r.response_text), r.widget_data),
        None => (None, None, None),
    };

    Ok(Json(TestQueryResponse {
        persona,
        mode,
        query,
        widget_type,
        response_text,
        has_widget_data: widget_data.is_some(),
        widget_data,
    }))
}

/// Ranked candidate diagnostics for a query. Useful when a phrasing lands on
/// an unexpected widget: the full score breakdown shows why.
#[utoipa::path(
    get,
    path = "/api/test-query/explain",
    params(TestQueryParams),
    responses(
        (status = 200, description = "All qualifying candidates with scores", body = ExplainQueryResponse),
        (status = 400, description = "Missing persona or query parameter", body = switchboard_core::error::ApiError)
    ),
    tag = "routing"
)]
pub async fn explain_query(
    State(state): State<AppState>,
    Query(params): Query<TestQueryParams>,
) -> Result<Json<ExplainQueryResponse>, AppError> {
    let (persona, query) = require(&params)?;
    let mode = effective_mode(&state, &persona, params.mode.as_deref());

    let candidates = state.router.explain(&query, &persona, &mode);
    Ok(Json(ExplainQueryResponse {
        persona,
        mode,
        query,
        candidates,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use switchboard_core::QueryRouter;

    use super::*;

    fn state() -> AppState {
        AppState {
            router: Arc::new(QueryRouter::builtin().expect("builtin catalog must be valid")),
        }
    }

    #[test]
    fn mode_defaults_to_the_personas_directory_mode() {
        let s = state();
        assert_eq!(effective_mode(&s, "cor", None), "government");
        assert_eq!(effective_mode(&s, "atc-support", None), "atc");
        assert_eq!(effective_mode(&s, "cor", Some("project")), "project");
    }

    #[test]
    fn unknown_persona_gets_an_empty_mode() {
        let s = state();
        assert_eq!(effective_mode(&s, "nobody", None), "");
    }

    #[test]
    fn missing_params_are_rejected() {
        let params = TestQueryParams {
            persona: None,
            query: Some("contract status".to_string()),
            mode: None,
        };
        assert!(require(&params).is_err());

        let params = TestQueryParams {
            persona: Some("cor".to_string()),
            query: None,
            mode: None,
        };
        assert!(require(&params).is_err());
    }
}
