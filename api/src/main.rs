use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use serde::Serialize;
use switchboard_core::QueryRouter;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod error;
mod routes;
mod state;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Switchboard API",
        version = "0.1.0",
        description = "Deterministic query intent router for the persona-driven support chat demo. \
                       Resolves free-text queries to dashboard widgets, scoped by persona and mode."
    ),
    paths(
        routes::health::health_check,
        routes::query::test_query,
        routes::query::explain_query,
        routes::personas::list_personas,
    ),
    components(schemas(
        HealthResponse,
        routes::query::TestQueryResponse,
        routes::query::ExplainQueryResponse,
        routes::personas::PersonasResponse,
        switchboard_core::error::ApiError,
        switchboard_core::pattern::PersonaProfile,
        switchboard_core::pattern::WidgetType,
        switchboard_core::pattern::MatchMethod,
        switchboard_core::resolve::CandidateScore,
    ))
)]
struct ApiDoc;

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub patterns: usize,
    pub personas: usize,
}

#[tokio::main]
async fn main() {
    // Load .env if present (dev only)
    let _ = dotenvy::dotenv();

    // Structured JSON logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "switchboard_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // A malformed catalog is a build defect; refuse to start.
    let router = QueryRouter::builtin().expect("builtin pattern catalog must be valid");
    tracing::info!(
        patterns = router.catalog().patterns().len(),
        "pattern catalog loaded"
    );

    let app_state = state::AppState {
        router: Arc::new(router),
    };

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(routes::health::router())
        .merge(routes::query::router())
        .merge(routes::personas::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // The demo UI is served from a different origin.
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Switchboard API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
