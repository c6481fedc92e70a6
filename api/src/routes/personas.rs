use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use switchboard_core::pattern::PersonaProfile;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/personas", get(list_personas))
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PersonasResponse {
    pub personas: Vec<PersonaProfile>,
}

/// The persona directory: every identity the router will resolve queries
/// for, with its default mode.
#[utoipa::path(
    get,
    path = "/api/personas",
    responses(
        (status = 200, description = "All known personas", body = PersonasResponse)
    ),
    tag = "catalog"
)]
pub async fn list_personas(State(state): State<AppState>) -> Json<PersonasResponse> {
    let personas = state.router.catalog().personas().cloned().collect();
    Json(PersonasResponse { personas })
}
