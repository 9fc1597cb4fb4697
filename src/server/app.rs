use axum::{middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::api::{api_routes, email_routes};

use super::{api_key_auth, AppState};

/// Maximum accepted request body; rendered documents are small, so a large
/// body is always a caller mistake.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Email endpoints require the configured API key; health and metrics
    // stay open for probes and scrapers
    let protected = email_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), api_key_auth));

    Router::new()
        .merge(api_routes())
        .nest("/api/v1", protected)
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors)
        // Add state
        .with_state(state)
}
