//! Document wrapper: embeds rewritten content in a complete email document.
//!
//! The generated document uses the universal email-HTML techniques: a
//! centering outer table with a fixed-width 700px container (margin:auto is
//! unreliable in mail clients), VML namespaces on the html tag so Outlook
//! recognizes the gradient shapes, and dual-rendered header/footer
//! gradients (VML fill for MSO, CSS linear-gradient elsewhere).
//!
//! Wrapping is idempotent: the content area is delimited by sentinel
//! comments, and `wrap` recovers the previous content from an input that
//! was already wrapped, so header/footer rows are never duplicated.

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::metrics;

use super::rewrite::process_content;
use super::TemplateOptions;

/// Sentinel delimiting the start of the wrapped content area
const BODY_START: &str = "<!--email-body:start-->";

/// Sentinel delimiting the end of the wrapped content area
const BODY_END: &str = "<!--email-body:end-->";

const FONT_STACK: &str = "Arial,Helvetica,sans-serif";

/// Dark end of the brand gradient
const GRADIENT_DARK: &str = "#0b0b0f";

/// Purple end of the brand gradient
const GRADIENT_PURPLE: &str = "#6b21a8";

lazy_static! {
    static ref DOCTYPE_TAG: Regex = Regex::new(r"(?i)<!DOCTYPE[^>]*>").unwrap();
    static ref HEAD_BLOCK: Regex = Regex::new(r"(?is)<head[^>]*>.*?</head>").unwrap();
    static ref HTML_TAG: Regex = Regex::new(r"(?i)</?html[^>]*>").unwrap();
    static ref BODY_TAG: Regex = Regex::new(r"(?i)</?body[^>]*>").unwrap();

    /// Open tags of wrapper divs from a previous wrapping (or a foreign
    /// template using the same class scheme). Closing tags are left behind;
    /// this is a best-effort guard, the sentinel path is the reliable one.
    static ref WRAPPER_DIV: Regex = Regex::new(
        r#"(?is)<div[^>]*class\s*=\s*"[^"]*email-(?:wrapper|container|header|body|footer)[^"]*"[^>]*>"#
    )
    .unwrap();
}

/// Remove any pre-existing document shell from `content`.
///
/// If the input was produced by a previous `wrap` call, the prior content
/// area is extracted via the sentinel comments and everything else
/// (header, footer, head block) is discarded. Otherwise stray top-level
/// structure is stripped tag by tag.
fn strip_existing_shell(content: &str) -> String {
    if let (Some(start), Some(end)) = (content.find(BODY_START), content.find(BODY_END)) {
        if start < end {
            return content[start + BODY_START.len()..end].trim().to_string();
        }
    }

    let stripped = DOCTYPE_TAG.replace_all(content, "");
    let stripped = HEAD_BLOCK.replace_all(&stripped, "");
    let stripped = HTML_TAG.replace_all(&stripped, "");
    let stripped = BODY_TAG.replace_all(&stripped, "");
    let stripped = WRAPPER_DIV.replace_all(&stripped, "");
    stripped.trim().to_string()
}

fn head_block(options: &TemplateOptions) -> String {
    format!(
        r##"<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<meta http-equiv="X-UA-Compatible" content="IE=edge" />
<title>{title}</title>
<!--[if mso]>
<style type="text/css">
table {{border-collapse:collapse;}}
.gradient {{background:{dark} !important;}}
</style>
<xml>
<o:OfficeDocumentSettings>
<o:PixelsPerInch>96</o:PixelsPerInch>
</o:OfficeDocumentSettings>
</xml>
<![endif]-->
<style type="text/css">
body {{margin:0;padding:0;-webkit-text-size-adjust:100%;-ms-text-size-adjust:100%;}}
table {{border-spacing:0;mso-table-lspace:0pt;mso-table-rspace:0pt;}}
img {{border:0;line-height:100%;outline:none;text-decoration:none;-ms-interpolation-mode:bicubic;}}
a {{color:{purple};}}
@media only screen and (max-width:700px) {{
.email-container {{width:100% !important;}}
.email-body {{padding:24px 16px !important;}}
}}
</style>
</head>"##,
        title = options.title,
        dark = GRADIENT_DARK,
        purple = GRADIENT_PURPLE,
    )
}

/// Gradient header row: MSO renders the VML rect fill, everything else the
/// CSS gradient. Outlook cannot render CSS gradients at all, hence the
/// solid-color override in the conditional head style.
fn header_row(options: &TemplateOptions) -> String {
    format!(
        r##"<tr>
<td class="email-header" align="center" style="padding:0;">
<!--[if mso]>
<v:rect xmlns:v="urn:schemas-microsoft-com:vml" fill="true" stroke="false" style="width:700px;">
<v:fill type="gradient" angle="270" color="{dark}" color2="{purple}" />
<v:textbox inset="0,0,0,0">
<![endif]-->
<div class="gradient" style="background:{dark};background:-webkit-linear-gradient(315deg,{dark} 0%,{purple} 100%);background:linear-gradient(135deg,{dark} 0%,{purple} 100%);padding:32px 24px;text-align:center;">
<a href="{website}" style="text-decoration:none;">
<img src="{logo}" alt="Car Audio Events" width="220" style="display:block;margin:0 auto;border:0;max-width:220px;" />
</a>
<p style="margin:14px 0 0 0;padding:0;color:#e9d5ff;font-family:{font};font-size:13px;letter-spacing:2px;">THE PREMIER DESTINATION FOR CAR AUDIO COMPETITION</p>
</div>
<!--[if mso]>
</v:textbox>
</v:rect>
<![endif]-->
</td>
</tr>"##,
        dark = GRADIENT_DARK,
        purple = GRADIENT_PURPLE,
        website = options.website_url,
        logo = options.logo_url,
        font = FONT_STACK,
    )
}

/// Gradient footer row with social links, copyright, and list-management
/// links. Social URLs are fixed brand properties, not caller options.
fn footer_row(options: &TemplateOptions) -> String {
    format!(
        r##"<tr>
<td class="email-footer" align="center" style="padding:0;">
<!--[if mso]>
<v:rect xmlns:v="urn:schemas-microsoft-com:vml" fill="true" stroke="false" style="width:700px;">
<v:fill type="gradient" angle="270" color="{dark}" color2="{purple}" />
<v:textbox inset="0,0,0,0">
<![endif]-->
<div class="gradient" style="background:{dark};background:-webkit-linear-gradient(315deg,{dark} 0%,{purple} 100%);background:linear-gradient(135deg,{dark} 0%,{purple} 100%);padding:28px 24px;text-align:center;font-family:{font};">
<p class="social-links" style="margin:0 0 14px 0;padding:0;font-size:14px;">
<a href="https://www.facebook.com/caraudioevents" style="color:#e9d5ff;text-decoration:none;margin:0 8px;">Facebook</a>
<a href="https://www.instagram.com/caraudioevents" style="color:#e9d5ff;text-decoration:none;margin:0 8px;">Instagram</a>
<a href="https://www.youtube.com/@caraudioevents" style="color:#e9d5ff;text-decoration:none;margin:0 8px;">YouTube</a>
</p>
<p style="margin:0 0 10px 0;padding:0;color:#c4b5fd;font-size:12px;">&copy; {year} Car Audio Events. All rights reserved.</p>
<p style="margin:0 0 10px 0;padding:0;font-size:12px;">
<a href="{website}" style="color:#e9d5ff;text-decoration:underline;margin:0 6px;">Website</a>
<a href="{website}/support" style="color:#e9d5ff;text-decoration:underline;margin:0 6px;">Support</a>
<a href="{website}/privacy" style="color:#e9d5ff;text-decoration:underline;margin:0 6px;">Privacy Policy</a>
</p>
<p style="margin:0;padding:0;font-size:12px;">
<a href="{unsubscribe}" style="color:#c4b5fd;text-decoration:underline;margin:0 6px;">Unsubscribe</a>
<a href="{preferences}" style="color:#c4b5fd;text-decoration:underline;margin:0 6px;">Email Preferences</a>
</p>
</div>
<!--[if mso]>
</v:textbox>
</v:rect>
<![endif]-->
</td>
</tr>"##,
        dark = GRADIENT_DARK,
        purple = GRADIENT_PURPLE,
        font = FONT_STACK,
        year = Utc::now().year(),
        website = options.website_url,
        unsubscribe = options.unsubscribe_link,
        preferences = options.preferences_link,
    )
}

/// Wrap `content` in a complete, standalone email document.
///
/// The content rewriter runs internally; callers do not need to invoke
/// `process_content` first (doing so anyway is harmless). Malformed input
/// is embedded as-is; this function cannot fail.
pub fn wrap(content: &str, options: &TemplateOptions) -> String {
    let timer = metrics::RENDER_DURATION_SECONDS.start_timer();

    let cleaned = strip_existing_shell(content);
    let body = process_content(&cleaned);

    let mut doc = String::with_capacity(body.len() + 8 * 1024);
    doc.push_str("<!DOCTYPE html>\n");
    doc.push_str(r#"<html xmlns="http://www.w3.org/1999/xhtml" xmlns:v="urn:schemas-microsoft-com:vml" xmlns:o="urn:schemas-microsoft-com:office:office">"#);
    doc.push('\n');
    doc.push_str(&head_block(options));
    doc.push_str(
        r##"
<body style="margin:0;padding:0;background-color:#f3f4f6;">
<div class="email-wrapper">
<table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" bgcolor="#f3f4f6">
<tr>
<td align="center" style="padding:24px 0;">
<table role="presentation" class="email-container" width="700" cellpadding="0" cellspacing="0" border="0" style="width:700px;max-width:700px;">
"##,
    );

    if options.include_header {
        doc.push_str(&header_row(options));
        doc.push('\n');
    }

    doc.push_str(r##"<tr>
<td class="email-body" bgcolor="#ffffff" style="background-color:#ffffff;padding:32px 40px;">
"##);
    doc.push_str(BODY_START);
    doc.push('\n');
    doc.push_str(&body);
    doc.push('\n');
    doc.push_str(BODY_END);
    doc.push_str(
        "\n</td>
</tr>
",
    );

    if options.include_footer {
        doc.push_str(&footer_row(options));
        doc.push('\n');
    }

    doc.push_str(
        "</table>
</td>
</tr>
</table>
</div>
</body>
</html>",
    );

    timer.observe_duration();
    metrics::EMAILS_RENDERED_TOTAL.inc();

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_produces_full_document() {
        let doc = wrap("<p>Hi</p>", &TemplateOptions::default());

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("urn:schemas-microsoft-com:vml"));
        assert!(doc.contains("<title>Car Audio Events</title>"));
        assert!(doc.ends_with("</html>"));
    }

    #[test]
    fn test_wrap_runs_rewriter_internally() {
        let doc = wrap("<h2>Hello</h2>", &TemplateOptions::default());
        assert!(doc.contains("<h2 style="));
        assert!(!doc.contains("<h2>Hello</h2>"));
    }

    #[test]
    fn test_header_footer_toggles() {
        let options = TemplateOptions {
            include_header: false,
            include_footer: false,
            ..TemplateOptions::default()
        };
        let doc = wrap("<p>Bare</p>", &options);

        assert!(!doc.contains("email-header"));
        assert!(!doc.contains("email-footer"));
        assert!(!doc.contains("Unsubscribe"));
        assert_eq!(doc.matches("Bare").count(), 1);
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let first = wrap("<p>Hi</p>", &TemplateOptions {
            title: "A".to_string(),
            ..TemplateOptions::default()
        });
        let second = wrap(&first, &TemplateOptions {
            title: "B".to_string(),
            ..TemplateOptions::default()
        });

        assert_eq!(second.matches("<!DOCTYPE html>").count(), 1);
        assert_eq!(second.matches("<img src=").count(), 1);
        assert_eq!(second.matches("Unsubscribe").count(), 1);
        assert!(second.contains("<title>B</title>"));
        assert!(!second.contains("<title>A</title>"));
    }

    #[test]
    fn test_rewrap_leaves_rewritten_fragments_alone() {
        // The recovered content area contains generated dual-syntax
        // fragments; the rewriter must not transform them again
        let content = r#"<div style="background-color:#fef3c7;">Tip</div><a href="/go" style="background-color:#dc2626;">Go</a>"#;
        let first = wrap(content, &TemplateOptions::default());
        let second = wrap(&first, &TemplateOptions::default());

        let fragment_blocks = |doc: &str| {
            (
                doc.matches("<v:roundrect").count(),
                doc.matches("<!--[if !mso]><!-->").count(),
                doc.matches("Tip").count(),
            )
        };
        assert_eq!(fragment_blocks(&first), fragment_blocks(&second));
        assert_eq!(second.matches("<v:roundrect").count(), 1);
    }

    #[test]
    fn test_strip_foreign_document_structure() {
        let input = "<!DOCTYPE html><html><head><title>x</title></head><body><p>Kept</p></body></html>";
        let doc = wrap(input, &TemplateOptions::default());

        assert_eq!(doc.matches("<!DOCTYPE html>").count(), 1);
        assert!(!doc.contains("<title>x</title>"));
        assert!(doc.contains("Kept"));
    }

    #[test]
    fn test_empty_content_still_renders_shell() {
        let doc = wrap("", &TemplateOptions::default());

        assert!(doc.contains("<!DOCTYPE html>"));
        assert!(doc.contains("email-body"));
        assert!(doc.contains("Unsubscribe"));
    }

    #[test]
    fn test_custom_links_substituted() {
        let options = TemplateOptions {
            unsubscribe_link: "https://example.com/u?id=42".to_string(),
            preferences_link: "https://example.com/prefs".to_string(),
            ..TemplateOptions::default()
        };
        let doc = wrap("<p>Hi</p>", &options);

        assert!(doc.contains(r#"href="https://example.com/u?id=42""#));
        assert!(doc.contains(r#"href="https://example.com/prefs""#));
    }
}
