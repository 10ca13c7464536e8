pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Deterministic engine endpoints
        .route("/match-jobs", post(handlers::handle_match_jobs))
        .route(
            "/salary-impact-calculator",
            post(handlers::handle_salary_impact),
        )
        // Model-backed endpoints
        .route(
            "/opportunity-gap-analysis",
            post(handlers::handle_gap_analysis),
        )
        .route(
            "/generate-curriculum",
            post(handlers::handle_generate_curriculum),
        )
        .route("/market-insights", post(handlers::handle_market_insights))
        .route("/coach-chat", post(handlers::handle_coach_chat))
        .route("/generate-course", post(handlers::handle_generate_course))
        .route(
            "/generate-full-analysis",
            post(handlers::handle_full_analysis),
        )
        .with_state(state)
}
