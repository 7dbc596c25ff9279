use std::sync::Arc;

use crate::auth::LOCAL_USER_ID;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let Some(auth) = &state.auth else {
        // Open mode has no credentials; hand back the fixed local session.
        return Ok(Json(json!({ "token": "", "userId": LOCAL_USER_ID })));
    };
    let (token, user_id) = auth.login(&body.email, &body.password)?;
    Ok(Json(json!({ "token": token, "userId": user_id })))
}

async fn status(State(state): State<Arc<AppState>>) -> ApiResult<Json<serde_json::Value>> {
    Ok(Json(json!({ "required": state.auth.is_some() })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/status", get(status))
}
