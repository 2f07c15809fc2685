pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::extractor::handlers as extractor_handlers;
use crate::matching::handlers as matching_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Insights API
        .route(
            "/api/v1/insights/gap-analysis",
            post(matching_handlers::handle_gap_analysis),
        )
        // Recommender API
        .route(
            "/api/v1/recommendations/refresh",
            post(matching_handlers::handle_refresh_recommendations),
        )
        // Resume extraction proxy
        .route(
            "/api/v1/resumes/extract",
            post(extractor_handlers::handle_extract),
        )
        .with_state(state)
}
