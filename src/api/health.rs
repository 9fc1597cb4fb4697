//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub mailer: MailerHealthResponse,
}

#[derive(Debug, Serialize)]
pub struct MailerHealthResponse {
    pub backend: String,
    pub configured: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        mailer: MailerHealthResponse {
            backend: state.mailer.backend().to_string(),
            configured: state.settings.smtp.enabled,
        },
    })
}
