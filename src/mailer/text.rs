//! Plain-text fallback derived from rendered HTML.
//!
//! The MSO conditional branches are removed before tag stripping so the
//! dual-syntax fragments do not produce duplicated text in the fallback.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref STYLE_BLOCK: Regex = Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap();
    static ref MSO_BLOCK: Regex = Regex::new(r"(?s)<!--\[if mso\]>.*?<!\[endif\]-->").unwrap();
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref BLOCK_BREAK: Regex =
        Regex::new(r"(?i)</(?:p|div|tr|table|h1|h2|h3|li|blockquote)>|<br\s*/?>").unwrap();
    static ref TAG: Regex = Regex::new(r"(?s)<[^>]+>").unwrap();
    static ref TRAILING_SPACE: Regex = Regex::new(r"[ \t]+\n").unwrap();
    static ref SPACE_RUN: Regex = Regex::new(r"[ \t]{2,}").unwrap();
    static ref BLANK_RUN: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Convert rendered email HTML into a readable plain-text alternative.
pub fn html_to_text(html: &str) -> String {
    let text = STYLE_BLOCK.replace_all(html, "");
    let text = MSO_BLOCK.replace_all(&text, "");
    let text = COMMENT.replace_all(&text, "");
    let text = BLOCK_BREAK.replace_all(&text, "\n");
    let text = TAG.replace_all(&text, "");

    let text = text
        .replace("&nbsp;", " ")
        .replace("&copy;", "(c)")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");

    let text = SPACE_RUN.replace_all(&text, " ");
    let text = TRAILING_SPACE.replace_all(&text, "\n");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{wrap, TemplateOptions};

    #[test]
    fn test_tags_stripped() {
        assert_eq!(html_to_text("<p>Hello <strong>there</strong></p>"), "Hello there");
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(html_to_text("<p>Fish &amp; Chips&nbsp;&copy; 2026</p>"), "Fish & Chips (c) 2026");
    }

    #[test]
    fn test_mso_branch_not_duplicated() {
        let html = crate::template::create_box(
            "<p>Once only</p>",
            &crate::template::BoxOptions::default(),
        );
        let text = html_to_text(&html);
        assert_eq!(text.matches("Once only").count(), 1);
    }

    #[test]
    fn test_full_document_readable() {
        let doc = wrap(
            "<h1>Registration Confirmed</h1><p>See you at finals.</p>",
            &TemplateOptions::default(),
        );
        let text = html_to_text(&doc);

        assert!(text.contains("Registration Confirmed"));
        assert!(text.contains("See you at finals."));
        assert!(!text.contains("<"));
        assert!(!text.contains("v:roundrect"));
    }

    #[test]
    fn test_block_elements_become_newlines() {
        let text = html_to_text("<p>one</p><p>two</p>");
        assert_eq!(text, "one\ntwo");
    }
}
