pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/skills", post(handlers::handle_extract_skills))
        .route("/api/v1/materials", post(handlers::handle_generate_materials))
        .with_state(state)
}
