//! Outlook-compatible email templating pipeline.
//!
//! This module provides:
//! - Fragment builders (`create_box`, `create_button`, `create_heading`) that
//!   emit dual-syntax HTML: a VML/table branch for Outlook's Word-based
//!   renderer and a CSS branch for everything else, gated by conditional
//!   comments
//! - A content rewriter (`process_content`) that detects known authoring
//!   patterns in raw body HTML and replaces each with its dual-syntax
//!   equivalent
//! - A document wrapper (`wrap`) that embeds rewritten content in a complete
//!   branded HTML document (head, gradient header, footer)
//!
//! # Example
//!
//! ```ignore
//! let options = TemplateOptions::default();
//! let html = wrap("<h2>Event Registration</h2><p>You are in.</p>", &options);
//! // `html` is a standalone document ready to hand to a Mailer
//! ```
//!
//! The pipeline is stateless and infallible: every operation is a pure
//! function from strings and options to a string. Authoring patterns that
//! fail to match are passed through unchanged rather than reported.

mod fragments;
mod rewrite;
mod wrapper;

pub use fragments::{
    create_box, create_button, create_heading, BoxOptions, ButtonOptions, HeadingLevel,
    HeadingOptions,
};
pub use rewrite::process_content;
pub use wrapper::wrap;

use serde::{Deserialize, Serialize};

use crate::config::BrandingConfig;

/// Default document title and `<title>` text
pub const DEFAULT_TITLE: &str = "Car Audio Events";

/// Default site URL the header logo links to
pub const DEFAULT_WEBSITE_URL: &str = "https://caraudioevents.com";

/// Default hosted logo asset
pub const DEFAULT_LOGO_URL: &str =
    "https://caraudioevents.com/assets/logos/cae-logo-horizontal.png";

/// Default unsubscribe landing page
pub const DEFAULT_UNSUBSCRIBE_LINK: &str = "https://caraudioevents.com/unsubscribe";

/// Default email preference center
pub const DEFAULT_PREFERENCES_LINK: &str = "https://caraudioevents.com/email-preferences";

/// Background color that marks an authored callout box
pub const CALLOUT_BACKGROUND: &str = "#fef3c7";

/// Border color paired with the callout background
pub const CALLOUT_BORDER: &str = "#f59e0b";

/// Background color that marks an authored danger/action button
pub const DANGER_BACKGROUND: &str = "#dc2626";

/// Options for the document wrapper.
///
/// Every field has a default; callers override only what they need. URL
/// fields are substituted verbatim into the generated markup with no
/// escaping or validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateOptions {
    /// Render the gradient header row with logo and tagline
    pub include_header: bool,

    /// Render the gradient footer row with social and list-management links
    pub include_footer: bool,

    /// Document `<title>`
    pub title: String,

    /// URL the header logo links to
    pub website_url: String,

    /// Logo image source
    pub logo_url: String,

    /// Footer unsubscribe link target
    pub unsubscribe_link: String,

    /// Footer email-preferences link target
    pub preferences_link: String,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            include_header: true,
            include_footer: true,
            title: DEFAULT_TITLE.to_string(),
            website_url: DEFAULT_WEBSITE_URL.to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            unsubscribe_link: DEFAULT_UNSUBSCRIBE_LINK.to_string(),
            preferences_link: DEFAULT_PREFERENCES_LINK.to_string(),
        }
    }
}

impl TemplateOptions {
    /// Build options whose defaults come from the configured branding
    /// instead of the built-in constants.
    pub fn from_branding(branding: &BrandingConfig) -> Self {
        Self {
            include_header: true,
            include_footer: true,
            title: branding.title.clone(),
            website_url: branding.website_url.clone(),
            logo_url: branding.logo_url.clone(),
            unsubscribe_link: branding.unsubscribe_link.clone(),
            preferences_link: branding.preferences_link.clone(),
        }
    }
}
