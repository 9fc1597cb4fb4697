//! End-to-end properties of the templating pipeline.
//!
//! These tests exercise the public library surface the way the email
//! dispatch handlers use it, without any server or SMTP setup.

use cae_email_service::template::{
    create_button, process_content, wrap, ButtonOptions, TemplateOptions,
};

fn bare_options() -> TemplateOptions {
    TemplateOptions {
        include_header: false,
        include_footer: false,
        ..TemplateOptions::default()
    }
}

#[test]
fn content_appears_once_without_header_or_footer() {
    let doc = wrap("<p>DISTINGUISHING-SUBSTRING</p>", &bare_options());

    assert_eq!(doc.matches("DISTINGUISHING-SUBSTRING").count(), 1);
    assert_eq!(doc.matches("Unsubscribe").count(), 0);
    assert_eq!(doc.matches("<img").count(), 0);
}

#[test]
fn callout_box_renders_in_both_branches() {
    let input = r##"<div style="background-color: #fef3c7; border: 1px solid #f59e0b;">X</div>"##;
    let output = process_content(input);

    assert!(output.contains("<!--[if mso]>"));
    assert!(output.contains("<!--[if !mso]><!-->"));
    // inner text in the MSO table cell and in the CSS div
    assert_eq!(output.matches(">\nX\n<").count(), 2);
    assert!(output.contains("<td bgcolor="));
    assert!(output.contains("<div style="));
}

#[test]
fn button_renders_vml_and_fallback_anchor() {
    let input =
        r##"<a href="https://caraudioevents.com/renew" style="background-color: #dc2626;">TEXT</a>"##;
    let output = process_content(input);

    assert!(output.contains("<v:roundrect"));
    assert!(output.contains(r#"<v:roundrect xmlns:v="urn:schemas-microsoft-com:vml""#));
    assert_eq!(
        output.matches(r#"href="https://caraudioevents.com/renew""#).count(),
        2
    );
    assert_eq!(output.matches("TEXT").count(), 2);
}

#[test]
fn plain_heading_is_table_wrapped() {
    let output = process_content("<h2>Plain Text</h2>");

    assert!(output.contains("<table"));
    assert_eq!(output.matches("Plain Text").count(), 1);
    assert!(!output.contains("<h2>Plain Text</h2>"));
}

#[test]
fn rewrapping_does_not_duplicate_shell() {
    let first = wrap(
        "<p>Hi</p>",
        &TemplateOptions {
            title: "A".to_string(),
            ..TemplateOptions::default()
        },
    );
    let second = wrap(
        &first,
        &TemplateOptions {
            title: "B".to_string(),
            ..TemplateOptions::default()
        },
    );

    assert_eq!(second.matches("<!DOCTYPE html>").count(), 1);
    assert_eq!(second.matches("<img src=").count(), 1);
    assert_eq!(second.matches("facebook.com/caraudioevents").count(), 1);
    assert_eq!(second.matches("Hi").count(), 1);
}

#[test]
fn rewrapping_does_not_duplicate_fragments() {
    let body = r##"<div style="background-color: #fef3c7;">Heads up</div>
<a href="https://caraudioevents.com/go" style="background-color: #dc2626;">Go Now</a>"##;

    let first = wrap(body, &TemplateOptions::default());
    let second = wrap(&first, &TemplateOptions::default());

    assert_eq!(second.matches("<v:roundrect").count(), 1);
    assert_eq!(second.matches("Heads up").count(), 2);
    assert_eq!(second.matches("Go Now").count(), 2);
    assert_eq!(
        first.matches("<!--[if !mso]><!-->").count(),
        second.matches("<!--[if !mso]><!-->").count()
    );
}

#[test]
fn default_options_use_brand_constants() {
    let doc = wrap("<p>Test</p>", &TemplateOptions::default());

    assert!(doc.contains("<title>Car Audio Events</title>"));
    assert!(doc.contains(
        r#"src="https://caraudioevents.com/assets/logos/cae-logo-horizontal.png""#
    ));
    assert!(doc.contains(r#"href="https://caraudioevents.com/unsubscribe""#));
}

#[test]
fn empty_content_returns_document_shell() {
    let doc = wrap("", &TemplateOptions::default());

    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("email-body"));
    assert!(doc.ends_with("</html>"));
}

#[test]
fn builders_usable_directly_outside_rewriter() {
    let fragment = create_button("Pay Dues", "https://caraudioevents.com/billing", &ButtonOptions {
        background_color: "#16a34a".to_string(),
        ..ButtonOptions::default()
    });

    assert!(fragment.contains(r##"fillcolor="#16a34a""##));
    assert_eq!(fragment.matches("Pay Dues").count(), 2);
}

#[test]
fn full_pipeline_on_mixed_content() {
    let body = r##"<h1>Finals Weekend</h1>
<p>Gates open at 8am.</p>
<div style="background-color: #fef3c7; padding: 10px;">Sound check closes at 7:30am sharp.</div>
<a href="https://caraudioevents.com/schedule" style="background-color: #dc2626; color: #fff;">View Schedule</a>"##;

    let doc = wrap(body, &TemplateOptions::default());

    // every raw pattern was transformed
    assert!(!doc.contains("<h1>Finals Weekend</h1>"));
    assert!(!doc.contains(r##"<div style="background-color: #fef3c7"##));
    assert!(doc.contains("<v:roundrect"));
    // content survived the transforms
    assert!(doc.contains("Finals Weekend"));
    assert!(doc.contains("Sound check closes at 7:30am sharp."));
    assert_eq!(doc.matches("View Schedule").count(), 2);
}
