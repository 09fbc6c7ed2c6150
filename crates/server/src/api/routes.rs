use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::service::StreamService;

/// Creates the main API router with all routes
pub fn create_router(service: StreamService) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        // Catalog
        .route("/movies", get(handlers::get_movies))
        .route("/search", get(handlers::search_movies))
        // Recommendations
        .route("/recommendations", get(handlers::get_recommendations))
        .route("/explain", get(handlers::explain))
        // Analytics
        .route("/log/interaction", post(handlers::log_interaction))
        .route("/analytics", get(handlers::get_analytics))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
