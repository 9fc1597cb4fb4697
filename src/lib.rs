//! Transactional email templating and dispatch for the Car Audio Events
//! platform.
//!
//! The core is the [`template`] module: a stateless pipeline that rewrites
//! authored HTML into markup that renders acceptably in both modern
//! clients and Outlook's Word-based engine, then wraps it in a complete
//! branded document. Delivery goes through the [`mailer`] abstraction, and
//! a small HTTP API exposes render-and-send, preview, and test-email
//! operations.

// Domain layer (templating pipeline and delivery)
pub mod mailer;
pub mod template;

// Application layer
pub mod api;
pub mod server;

// Supporting modules
pub mod config;
pub mod error;
pub mod metrics;
