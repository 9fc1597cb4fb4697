//! Prometheus metrics for the email service.
//!
//! This module provides metrics for monitoring the templating and dispatch
//! paths:
//! - Render metrics (documents rendered, render duration)
//! - Rewrite metrics (pattern replacements by kind)
//! - Delivery metrics (sends by outcome)

mod helpers;

pub use helpers::{encode_metrics, EmailMetrics, RewriteMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "cae";

lazy_static! {
    /// Total email documents rendered by the template wrapper
    pub static ref EMAILS_RENDERED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_emails_rendered_total", METRIC_PREFIX),
        "Total email documents rendered by the template wrapper"
    ).unwrap();

    /// Wall time spent assembling a document
    pub static ref RENDER_DURATION_SECONDS: Histogram = register_histogram!(
        format!("{}_render_duration_seconds", METRIC_PREFIX),
        "Time spent rendering an email document",
        vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]
    ).unwrap();

    /// Pattern replacements performed by the content rewriter, by kind
    pub static ref CONTENT_REWRITES_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_content_rewrites_total", METRIC_PREFIX),
        "Authoring patterns rewritten to dual-syntax fragments",
        &["pattern"]
    ).unwrap();

    /// Email send attempts, by outcome
    pub static ref EMAILS_SENT_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_emails_sent_total", METRIC_PREFIX),
        "Email send attempts by outcome",
        &["outcome"]
    ).unwrap();
}
