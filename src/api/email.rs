//! Email rendering and dispatch endpoints.

use axum::{extract::State, response::Html, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::mailer::{html_to_text, OutboundEmail};
use crate::server::AppState;
use crate::template::{process_content, wrap, TemplateOptions};

/// Request to render and send an email
#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Raw body HTML; recognized authoring patterns are rewritten for
    /// Outlook before sending
    pub body: String,
    /// Template options; defaults come from the configured branding
    pub options: Option<TemplateOptions>,
}

/// Request to render an email without sending it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewEmailRequest {
    /// Raw body HTML
    pub body: String,
    /// Template options; defaults come from the configured branding
    pub options: Option<TemplateOptions>,
    /// Skip the document wrapper and return only the rewritten content
    #[serde(default)]
    pub content_only: bool,
}

/// Request to send the canned admin test email
#[derive(Debug, Deserialize)]
pub struct TestEmailRequest {
    /// Recipient address
    pub to: String,
}

/// Response for send operations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    /// Whether the message was handed to the delivery backend
    pub success: bool,
    /// Server-assigned message ID
    pub message_id: Uuid,
    /// Delivery backend that accepted the message
    pub backend: String,
    /// Timestamp of the operation
    pub timestamp: DateTime<Utc>,
}

/// Render and send an email
pub async fn send_email(
    State(state): State<AppState>,
    Json(request): Json<SendEmailRequest>,
) -> Result<Json<SendEmailResponse>> {
    validate_recipient(&request.to)?;
    if request.subject.trim().is_empty() {
        return Err(AppError::Validation("Subject must not be empty".to_string()));
    }

    let options = request
        .options
        .unwrap_or_else(|| TemplateOptions::from_branding(&state.settings.branding));

    let html = wrap(&request.body, &options);
    let text = html_to_text(&html);

    dispatch(&state, request.to, request.subject, html, text).await
}

/// Render an email and return the HTML without sending.
///
/// With `content_only` set, only the content rewriter runs; used by callers
/// that produce their own complete document and want inline-style
/// normalization.
pub async fn preview_email(
    State(state): State<AppState>,
    Json(request): Json<PreviewEmailRequest>,
) -> Html<String> {
    if request.content_only {
        return Html(process_content(&request.body));
    }

    let options = request
        .options
        .unwrap_or_else(|| TemplateOptions::from_branding(&state.settings.branding));

    Html(wrap(&request.body, &options))
}

/// Send a canned test email exercising all recognized authoring patterns;
/// backs the admin "send test email" tooling.
pub async fn send_test_email(
    State(state): State<AppState>,
    Json(request): Json<TestEmailRequest>,
) -> Result<Json<SendEmailResponse>> {
    validate_recipient(&request.to)?;

    let body = format!(
        r##"<h1>Test Email</h1>
<p>This is a test message from the Car Audio Events email service.</p>
<div style="background-color: #fef3c7; padding: 16px;">If this box has an amber border in Outlook, dual-syntax rendering works.</div>
<h2>Button Check</h2>
<a href="{}" style="background-color: #dc2626; color: #ffffff;">Visit the Site</a>
<p>If everything above renders, the template pipeline is healthy.</p>"##,
        state.settings.branding.website_url
    );

    let options = TemplateOptions::from_branding(&state.settings.branding);
    let html = wrap(&body, &options);
    let text = html_to_text(&html);

    dispatch(
        &state,
        request.to,
        "Car Audio Events Test Email".to_string(),
        html,
        text,
    )
    .await
}

async fn dispatch(
    state: &AppState,
    to: String,
    subject: String,
    html_body: String,
    text_body: String,
) -> Result<Json<SendEmailResponse>> {
    let email = OutboundEmail {
        to,
        subject,
        html_body,
        text_body,
    };

    state.mailer.send(&email).await?;

    Ok(Json(SendEmailResponse {
        success: true,
        message_id: Uuid::new_v4(),
        backend: state.mailer.backend().to_string(),
        timestamp: Utc::now(),
    }))
}

fn validate_recipient(to: &str) -> Result<()> {
    if to.trim().is_empty() {
        return Err(AppError::Validation(
            "Recipient address must not be empty".to_string(),
        ));
    }
    Ok(())
}
