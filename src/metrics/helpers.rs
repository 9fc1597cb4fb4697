//! Metrics helper structs for convenient metric recording

use prometheus::{Encoder, TextEncoder};

use super::{CONTENT_REWRITES_TOTAL, EMAILS_SENT_TOTAL};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording rewrite metrics
pub struct RewriteMetrics;

impl RewriteMetrics {
    /// Record a callout box replacement
    pub fn record_box() {
        CONTENT_REWRITES_TOTAL.with_label_values(&["box"]).inc();
    }

    /// Record a button replacement
    pub fn record_button() {
        CONTENT_REWRITES_TOTAL.with_label_values(&["button"]).inc();
    }

    /// Record a heading replacement
    pub fn record_heading() {
        CONTENT_REWRITES_TOTAL.with_label_values(&["heading"]).inc();
    }

    /// Record a paragraph style injection
    pub fn record_paragraph() {
        CONTENT_REWRITES_TOTAL
            .with_label_values(&["paragraph"])
            .inc();
    }
}

/// Helper struct for recording delivery metrics
pub struct EmailMetrics;

impl EmailMetrics {
    /// Record a successful send
    pub fn record_sent() {
        EMAILS_SENT_TOTAL.with_label_values(&["sent"]).inc();
    }

    /// Record a failed send
    pub fn record_failed() {
        EMAILS_SENT_TOTAL.with_label_values(&["failed"]).inc();
    }

    /// Record a send skipped because no transport is configured
    pub fn record_skipped() {
        EMAILS_SENT_TOTAL.with_label_values(&["skipped"]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_metrics_includes_registered_families() {
        RewriteMetrics::record_box();
        EmailMetrics::record_sent();

        let output = encode_metrics().unwrap();
        assert!(output.contains("cae_content_rewrites_total"));
        assert!(output.contains("cae_emails_sent_total"));
    }
}
