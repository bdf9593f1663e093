use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::{request_id_middleware, request_span};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        // Outermost, so the trace span can see the request ID
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/recommendations", post(handlers::recommendations))
        .route("/budget-tier", get(handlers::budget_tier))
        .route("/dataset/summary", get(handlers::dataset_summary))
}
