use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiError, error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutRequest {
    price_id: String,
    customer_email: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutSessionRequest {
    price_id: String,
    user_id: String,
    customer_email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutSessionResponse {
    session_id: String,
}

/// Thin proxy to the payment processor's checkout-session endpoint; the
/// client redirects to hosted checkout with the returned session id.
async fn create_checkout_session(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<CheckoutRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let Some(checkout_url) = &state.checkout_url else {
        return Err(ApiError::Upstream(
            "Checkout is not configured on this server".to_string(),
        ));
    };

    let response = state
        .http_client
        .post(checkout_url)
        .json(&CheckoutSessionRequest {
            price_id: body.price_id,
            user_id,
            customer_email: body.customer_email,
        })
        .send()
        .await?
        .error_for_status()?;

    let session: CheckoutSessionResponse = response.json().await?;
    Ok(Json(json!({ "sessionId": session.session_id })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/checkout", post(create_checkout_session))
}
