use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::email::{preview_email, send_email, send_test_email};
use super::health::health;
use super::metrics::prometheus_metrics;

/// Unauthenticated routes: health probe and metrics scrape
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
}

/// Email routes, nested under /api/v1 behind the API-key middleware
pub fn email_routes() -> Router<AppState> {
    Router::new()
        .route("/emails/send", post(send_email))
        .route("/emails/preview", post(preview_email))
        .route("/emails/test", post(send_test_email))
}
