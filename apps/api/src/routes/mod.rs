pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::gateway::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/career", post(handlers::handle_career))
        .with_state(state)
}
