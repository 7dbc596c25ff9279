use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use summit_core::goals::{Goal, GoalNode, GoalUpdate, NewGoal};

async fn get_goals(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals(&user_id).await?;
    Ok(Json(goals))
}

async fn get_goal_hierarchy(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Vec<GoalNode>>> {
    let forest = state.goal_service.get_goal_hierarchy(&user_id).await?;
    Ok(Json(forest))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(goal): Json<NewGoal>,
) -> ApiResult<Json<Goal>> {
    let g = state.goal_service.create_goal(&user_id, goal).await?;
    Ok(Json(g))
}

async fn update_goal(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(goal): Json<GoalUpdate>,
) -> ApiResult<Json<Goal>> {
    let g = state.goal_service.update_goal(&user_id, goal).await?;
    Ok(Json(g))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<StatusCode> {
    let _ = state.goal_service.delete_goal(&user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals/hierarchy", get(get_goal_hierarchy))
        .route("/goals", get(get_goals).post(create_goal).put(update_goal))
        .route("/goals/{id}", delete(delete_goal))
}
