use axum::{extract::State, Json};

use crate::api::middleware::AuthUser;
use crate::api::AppState;
use crate::dashboard::DashboardSnapshot;

/// GET /api/dashboard
///
/// The last published snapshot, without touching the data source.
pub async fn current(State(state): State<AppState>, _auth: AuthUser) -> Json<DashboardSnapshot> {
    Json((*state.dashboard.snapshot()).clone())
}

/// POST /api/dashboard/refresh
///
/// Re-runs the aggregation for the caller's company and task scope.
/// Data-source failures degrade to empty collections, so this always
/// returns a snapshot.
pub async fn refresh(State(state): State<AppState>, auth: AuthUser) -> Json<DashboardSnapshot> {
    let snapshot = state.dashboard.refresh(auth.company_id, auth.user_id).await;
    Json((*snapshot).clone())
}
