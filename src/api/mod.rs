//! API layer - HTTP endpoint handlers organized by domain.

mod email;
mod health;
mod metrics;
mod routes;

// Re-export all handlers for use in server/app.rs
pub use email::{preview_email, send_email, send_test_email};
pub use email::{PreviewEmailRequest, SendEmailRequest, SendEmailResponse, TestEmailRequest};
pub use health::health;
pub use metrics::prometheus_metrics;
pub use routes::{api_routes, email_routes};
