use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use summit_core::dashboard::DashboardSnapshot;

/// Cached snapshot when available, otherwise a fresh load.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<DashboardSnapshot>> {
    let snapshot = state.dashboard_store.snapshot_or_refresh(&user_id).await?;
    Ok(Json(snapshot))
}

/// Force a re-synchronization, e.g. after a mutation.
async fn refresh_dashboard(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<DashboardSnapshot>> {
    let snapshot = state.dashboard_store.refresh(&user_id).await?;
    Ok(Json(snapshot))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/refresh", post(refresh_dashboard))
}
