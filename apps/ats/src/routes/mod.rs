pub mod evaluate;
pub mod health;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(pages::handle_index))
        .route("/evaluate", post(evaluate::handle_evaluate))
        .route("/health", get(health::health_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
