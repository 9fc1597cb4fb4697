//! Content rewriter: best-effort pattern substitution over raw body HTML.
//!
//! Four sequential passes replace known authoring idioms with their
//! dual-syntax equivalents:
//!
//! 1. Callout boxes - `div` styled with the callout background color
//! 2. Danger buttons - `a` styled with the danger background color
//! 3. Plain headings - `<h1>`..`<h3>` with no attributes and no nested tags
//! 4. Bare paragraphs - `<p>` with no attributes gets explicit inline styles
//!
//! Matching is text substitution, not parsing: markup that deviates from
//! the expected attribute shape passes through unrewritten and silently.
//! The regex engine is linear-time, so adversarial input cannot trigger
//! backtracking blowups.
//!
//! Regions inside conditional comments are never rewritten. The generated
//! fragments live entirely inside such regions and still carry the marker
//! colors in their CSS branch, so without this exclusion a second run
//! would nest fragments inside fragments. With it the passes are safe to
//! re-run: conditional regions are skipped wholesale, and rewritten
//! headings and paragraphs carry style attributes, which the plain-tag
//! patterns no longer match.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::metrics::RewriteMetrics;

use super::fragments::{
    create_box, create_button, create_heading, BoxOptions, ButtonOptions, HeadingLevel,
    HeadingOptions,
};

lazy_static! {
    /// `div` whose inline style carries the callout background, capturing
    /// the inner content. Non-greedy: stops at the first closing `div`.
    static ref CALLOUT_BOX: Regex = Regex::new(
        r#"(?is)<div[^>]*style\s*=\s*"[^"]*background-color:\s*#fef3c7[^"]*"[^>]*>(.*?)</div>"#
    )
    .unwrap();

    /// `a` whose inline style carries the danger background, capturing the
    /// open-tag attributes and the element text.
    static ref DANGER_BUTTON: Regex = Regex::new(
        r#"(?is)<a([^>]*style\s*=\s*"[^"]*background-color:\s*#dc2626[^"]*"[^>]*)>(.*?)</a>"#
    )
    .unwrap();

    /// `href` attribute inside a captured open tag
    static ref HREF_ATTR: Regex = Regex::new(r#"(?i)href\s*=\s*"([^"]*)""#).unwrap();

    /// Attribute-free heading whose body contains no nested tags. Open and
    /// close levels are captured separately and compared in the closure,
    /// since the engine has no backreferences.
    static ref PLAIN_HEADING: Regex =
        Regex::new(r"(?s)<h([1-3])>([^<]*)</h([1-3])>").unwrap();

    /// Attribute-free paragraph open tag
    static ref BARE_PARAGRAPH: Regex = Regex::new(r"<p>").unwrap();

    /// A complete conditional-comment region, either form. The downlevel
    /// revealed close marker `<!--<![endif]-->` ends on the same
    /// `<![endif]-->` literal, so one pattern covers both branches.
    static ref CONDITIONAL_BLOCK: Regex =
        Regex::new(r"(?s)<!--\[if [^\]]*\]>.*?<!\[endif\]-->").unwrap();
}

/// Inline style injected into bare paragraphs, a fallback for body text the
/// author left unstyled. Outlook ignores embedded stylesheets, so every
/// paragraph needs explicit styling to render consistently.
const PARAGRAPH_STYLE: &str = "margin:0 0 16px 0;padding:0;font-family:Arial,Helvetica,sans-serif;font-size:16px;line-height:1.6;color:#374151;";

/// Rewrite all recognized authoring patterns in `html`.
///
/// Always returns a string; zero matches passes the input through
/// unchanged. There is no signal for patterns that failed to match.
/// Conditional-comment regions pass through verbatim, which makes
/// re-running the rewriter over its own output a no-op.
pub fn process_content(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;

    for protected in CONDITIONAL_BLOCK.find_iter(html) {
        out.push_str(&rewrite_segment(&html[last..protected.start()]));
        out.push_str(protected.as_str());
        last = protected.end();
    }
    out.push_str(&rewrite_segment(&html[last..]));

    out
}

fn rewrite_segment(html: &str) -> String {
    let html = CALLOUT_BOX.replace_all(html, |caps: &Captures<'_>| {
        RewriteMetrics::record_box();
        create_box(&caps[1], &BoxOptions::default())
    });

    let html = DANGER_BUTTON.replace_all(&html, |caps: &Captures<'_>| {
        RewriteMetrics::record_button();
        let href = HREF_ATTR
            .captures(&caps[1])
            .map_or("#", |href| href.get(1).map_or("#", |m| m.as_str()))
            .to_string();
        create_button(caps[2].trim(), &href, &ButtonOptions::default())
    });

    let html = PLAIN_HEADING.replace_all(&html, |caps: &Captures<'_>| {
        // Mismatched close tag (e.g. <h1>..</h2>) is left alone
        if caps[1] != caps[3] {
            return caps[0].to_string();
        }
        match HeadingLevel::from_digit(&caps[1]) {
            Some(level) => {
                RewriteMetrics::record_heading();
                create_heading(caps[2].trim(), level, &HeadingOptions::default())
            }
            None => caps[0].to_string(),
        }
    });

    let html = BARE_PARAGRAPH.replace_all(&html, |_: &Captures<'_>| {
        RewriteMetrics::record_paragraph();
        format!(r#"<p style="{}">"#, PARAGRAPH_STYLE)
    });

    html.into_owned()
}
