// Route handlers.

pub mod assistant;
pub mod auth;
pub mod dashboard;

/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
