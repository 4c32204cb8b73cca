use std::sync::Arc;

use axum::{routing::get, Router};

use advisor_cell::router::advisor_routes;
use shared_config::AppConfig;
use shared_models::error::AppError;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Remedy API is running!" }))
        .merge(advisor_routes(state))
        .fallback(|| async { AppError::NotFound("No such endpoint".to_string()) })
}
