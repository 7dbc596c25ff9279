use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch},
    Json, Router,
};
use summit_core::tasks::{NewTask, Task, TaskStatusUpdate, TaskUpdate};

async fn get_tasks(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.task_service.get_tasks(&user_id).await?;
    Ok(Json(tasks))
}

async fn get_ranked_tasks(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.task_service.get_ranked_tasks(&user_id).await?;
    Ok(Json(tasks))
}

async fn create_task(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(task): Json<NewTask>,
) -> ApiResult<Json<Task>> {
    let t = state.task_service.create_task(&user_id, task).await?;
    Ok(Json(t))
}

async fn update_task(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(task): Json<TaskUpdate>,
) -> ApiResult<Json<Task>> {
    let t = state.task_service.update_task(&user_id, task).await?;
    Ok(Json(t))
}

async fn set_task_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(status): Json<TaskStatusUpdate>,
) -> ApiResult<Json<Task>> {
    let was_completed = state.task_service.get_task(&user_id, &id).await?.completed;
    let task = state
        .task_service
        .set_task_status(&user_id, &id, status)
        .await?;

    // Finishing a task counts as a qualifying day for the streak; a streak
    // hiccup must not fail the toggle.
    if task.completed && !was_completed {
        if let Err(err) = state.streak_service.record_activity(&user_id).await {
            tracing::warn!("streak update after task completion failed: {}", err);
        }
    }
    Ok(Json(task))
}

async fn delete_task(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<StatusCode> {
    let _ = state.task_service.delete_task(&user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks/ranked", get(get_ranked_tasks))
        .route("/tasks", get(get_tasks).post(create_task).put(update_task))
        .route("/tasks/{id}/status", patch(set_task_status))
        .route("/tasks/{id}", delete(delete_task))
}
