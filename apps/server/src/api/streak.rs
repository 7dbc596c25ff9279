use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use summit_core::streaks::Streak;

async fn get_streak(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Streak>> {
    let streak = state.streak_service.get_streak(&user_id).await?;
    Ok(Json(streak))
}

async fn record_activity(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Streak>> {
    let streak = state.streak_service.record_activity(&user_id).await?;
    Ok(Json(streak))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/streak", get(get_streak))
        .route("/streak/record", post(record_activity))
}
