pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::roadmap::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roadmap API
        .route("/api/v1/roadmaps", get(handlers::handle_list_roles))
        .route(
            "/api/v1/roadmaps/personalize",
            post(handlers::handle_personalize),
        )
        .route(
            "/api/v1/roadmaps/salary-estimate",
            post(handlers::handle_salary_estimate),
        )
        .route("/api/v1/roadmaps/:role", get(handlers::handle_get_roadmap))
        // Skills API
        .route(
            "/api/v1/skills/acquisition-order",
            post(handlers::handle_acquisition_order),
        )
        .route(
            "/api/v1/skills/recommendations",
            post(handlers::handle_recommendations),
        )
        .with_state(state)
}
