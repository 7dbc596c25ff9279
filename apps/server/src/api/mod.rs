//! HTTP API: one router module per entity, merged under `/api/v1`.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub mod achievements;
pub mod advisor;
pub mod auth;
pub mod checkout;
pub mod dashboard;
pub mod goals;
pub mod milestones;
pub mod preferences;
pub mod streak;
pub mod tasks;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(auth::router())
        .merge(goals::router())
        .merge(tasks::router())
        .merge(achievements::router())
        .merge(milestones::router())
        .merge(streak::router())
        .merge(preferences::router())
        .merge(dashboard::router())
        .merge(advisor::router())
        .merge(checkout::router())
        .with_state(state);

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
