pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::profile::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form surface
        .route("/", get(handlers::handle_index))
        .route("/profile", post(handlers::handle_profile_form))
        // JSON API
        .route("/api/v1/profile", post(handlers::handle_profile_api))
        .with_state(state)
}
