use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use summit_core::milestones::{Milestone, MilestoneUpdate, NewMilestone};

async fn get_milestones(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Vec<Milestone>>> {
    let milestones = state.milestone_service.get_milestones(&user_id).await?;
    Ok(Json(milestones))
}

async fn create_milestone(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(milestone): Json<NewMilestone>,
) -> ApiResult<Json<Milestone>> {
    let m = state
        .milestone_service
        .create_milestone(&user_id, milestone)
        .await?;
    Ok(Json(m))
}

async fn update_milestone(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(milestone): Json<MilestoneUpdate>,
) -> ApiResult<Json<Milestone>> {
    let m = state
        .milestone_service
        .update_milestone(&user_id, milestone)
        .await?;
    Ok(Json(m))
}

async fn delete_milestone(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<StatusCode> {
    let _ = state.milestone_service.delete_milestone(&user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/milestones",
            get(get_milestones)
                .post(create_milestone)
                .put(update_milestone),
        )
        .route("/milestones/{id}", delete(delete_milestone))
}
