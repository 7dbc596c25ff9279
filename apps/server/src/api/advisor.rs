use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiError, error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use summit_ai::Recommendation;
use summit_core::tasks::Task;

/// One endpoint, three actions — the wire contract the client already
/// speaks: `{action: "prioritize" | "strategy" | "agent", ...}`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdvisorRequest {
    action: String,
    #[serde(default)]
    tasks: Option<Vec<Task>>,
    #[serde(default)]
    task_id: Option<String>,
    #[serde(default)]
    prompt: Option<String>,
}

async fn advise(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<AdvisorRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    match body.action.as_str() {
        "prioritize" => {
            let recommendations = state
                .advisor_service
                .prioritize_tasks(&user_id, body.tasks)
                .await?;
            Ok(Json(json!({ "recommendations": recommendations })))
        }
        "strategy" => {
            let task_id = body.task_id.ok_or_else(|| {
                ApiError::BadRequest("taskId is required for the strategy action".to_string())
            })?;
            let recommendation = state
                .advisor_service
                .task_strategy(&user_id, &task_id)
                .await?;
            Ok(Json(json!({ "recommendation": recommendation })))
        }
        "agent" => {
            let prompt = body.prompt.ok_or_else(|| {
                ApiError::BadRequest("prompt is required for the agent action".to_string())
            })?;
            let reply = state.advisor_service.agent_prompt(&user_id, &prompt).await?;
            Ok(Json(json!({
                "response": reply.response,
                "tasksModified": reply.tasks_modified,
            })))
        }
        other => Err(ApiError::BadRequest(format!(
            "unknown advisor action '{}'",
            other
        ))),
    }
}

async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Vec<Recommendation>>> {
    let recommendations = state.advisor_service.get_recommendations(&user_id)?;
    Ok(Json(recommendations))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/advisor", post(advise))
        .route("/advisor/recommendations", get(get_recommendations))
}
