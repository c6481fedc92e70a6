use std::sync::Arc;

use switchboard_core::QueryRouter;

/// Shared application state. The router is immutable after startup, so
/// handlers only ever take cheap `Arc` clones.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<QueryRouter>,
}
