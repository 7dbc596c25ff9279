use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use summit_core::preferences::{PreferencesUpdate, UserPreferences};

async fn get_preferences(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<UserPreferences>> {
    let prefs = state.preference_service.get_preferences(&user_id).await?;
    Ok(Json(prefs))
}

async fn update_preferences(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(update): Json<PreferencesUpdate>,
) -> ApiResult<Json<UserPreferences>> {
    let prefs = state
        .preference_service
        .update_preferences(&user_id, update)
        .await?;
    Ok(Json(prefs))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/preferences",
        get(get_preferences).put(update_preferences),
    )
}
