use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use summit_core::achievements::{Achievement, NewAchievement};

async fn get_achievements(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Vec<Achievement>>> {
    let achievements = state.achievement_service.get_achievements(&user_id).await?;
    Ok(Json(achievements))
}

async fn create_achievement(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(achievement): Json<NewAchievement>,
) -> ApiResult<Json<Achievement>> {
    let a = state
        .achievement_service
        .create_achievement(&user_id, achievement)
        .await?;
    Ok(Json(a))
}

async fn earn_achievement(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Achievement>> {
    let a = state.achievement_service.mark_earned(&user_id, &id).await?;
    Ok(Json(a))
}

async fn delete_achievement(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<StatusCode> {
    let _ = state
        .achievement_service
        .delete_achievement(&user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/achievements",
            get(get_achievements).post(create_achievement),
        )
        .route("/achievements/{id}/earn", post(earn_achievement))
        .route("/achievements/{id}", delete(delete_achievement))
}
