use axum::routing::{get, post};
use axum::Router;

use super::handlers::{health, index, list_urls, redirect_to_target, search, status, visible};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(index))
        .route("/api/urls", get(list_urls))
        .route("/api/status", get(status))
        .route("/api/search", post(search))
        .route("/api/visible", post(visible))
        .route("/{title}", get(redirect_to_target))
        .with_state(state)
}
