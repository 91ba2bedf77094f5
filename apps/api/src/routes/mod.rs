pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/assessment/sections",
            get(handlers::handle_list_sections),
        )
        .route(
            "/api/v1/assessment/sessions",
            post(handlers::handle_create_session),
        )
        .route(
            "/api/v1/assessment/sessions/:id",
            get(handlers::handle_get_session),
        )
        .route(
            "/api/v1/assessment/sessions/:id/answer",
            post(handlers::handle_record_answer),
        )
        .route(
            "/api/v1/assessment/sessions/:id/next",
            post(handlers::handle_advance),
        )
        .route(
            "/api/v1/assessment/sessions/:id/previous",
            post(handlers::handle_retreat),
        )
        .with_state(state)
}
