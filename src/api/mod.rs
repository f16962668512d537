// HTTP adapter layer.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use sqlx::PgPool;

use crate::dashboard::DashboardStore;

pub mod errors;
pub mod handlers;
pub mod middleware;

/// Shared state handed to every handler.
///
/// The dashboard store is held explicitly here rather than as a global;
/// anything that needs it receives this state.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub dashboard: Arc<DashboardStore>,
}

/// Builds the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/auth/signup", post(handlers::auth::sign_up))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/dashboard", get(handlers::dashboard::current))
        .route("/api/dashboard/refresh", post(handlers::dashboard::refresh))
        .route("/api/assistant/persona", get(handlers::assistant::persona))
        .route(
            "/api/assistant/templates",
            get(handlers::assistant::templates),
        )
        .with_state(state)
}
