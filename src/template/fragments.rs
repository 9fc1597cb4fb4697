//! Dual-syntax fragment builders.
//!
//! Each builder returns a snippet containing two parallel renderings of the
//! same visual element: an MSO branch (tables, `bgcolor` attributes, VML
//! shapes) inside `<!--[if mso]>` guards for Outlook's Word engine, and a
//! CSS branch inside `<!--[if !mso]>` guards for standard clients. The
//! receiving mail client picks one branch; the generated string never
//! branches at runtime.
//!
//! Builders are pure string construction. Option values are not validated:
//! an invalid `padding` flows into the CSS as provided.

use serde::{Deserialize, Serialize};

use super::{CALLOUT_BACKGROUND, CALLOUT_BORDER, DANGER_BACKGROUND};

const FONT_STACK: &str = "Arial,Helvetica,sans-serif";

/// Style overrides for a callout box
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxOptions {
    pub background_color: String,
    pub border_color: String,
    pub border_radius: String,
    pub padding: String,
    pub margin: String,
    pub width: String,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            background_color: CALLOUT_BACKGROUND.to_string(),
            border_color: CALLOUT_BORDER.to_string(),
            border_radius: "8px".to_string(),
            padding: "20px".to_string(),
            margin: "20px 0".to_string(),
            width: "100%".to_string(),
        }
    }
}

/// Style overrides for an action button
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonOptions {
    pub background_color: String,
    pub text_color: String,
    pub padding: String,
    pub border_radius: String,
    pub font_size: String,
    pub font_weight: String,
    pub width: String,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            background_color: DANGER_BACKGROUND.to_string(),
            text_color: "#ffffff".to_string(),
            padding: "14px 28px".to_string(),
            border_radius: "6px".to_string(),
            font_size: "16px".to_string(),
            font_weight: "600".to_string(),
            width: "auto".to_string(),
        }
    }
}

/// Heading level recognized by the rewriter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }

    pub fn from_digit(digit: &str) -> Option<Self> {
        match digit {
            "1" => Some(HeadingLevel::H1),
            "2" => Some(HeadingLevel::H2),
            "3" => Some(HeadingLevel::H3),
            _ => None,
        }
    }

    /// Per-level defaults: color, font size, font weight, margin, padding
    fn defaults(self) -> (&'static str, &'static str, &'static str, &'static str, &'static str) {
        match self {
            HeadingLevel::H1 => ("#111827", "28px", "700", "0 0 20px 0", "0"),
            HeadingLevel::H2 => ("#111827", "24px", "700", "24px 0 16px 0", "0"),
            HeadingLevel::H3 => ("#1f2937", "20px", "600", "20px 0 12px 0", "0"),
        }
    }
}

/// Style overrides for a heading; unset fields resolve to the level defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadingOptions {
    pub color: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub margin: Option<String>,
    pub padding: Option<String>,
}

/// Build a dual-syntax callout box around `content`.
///
/// Outlook ignores CSS backgrounds and border-radius on divs, so the MSO
/// branch uses a table cell with a `bgcolor` attribute. The content string
/// is embedded verbatim in both branches.
pub fn create_box(content: &str, options: &BoxOptions) -> String {
    format!(
        r#"<!--[if mso]>
<table role="presentation" width="{width}" cellpadding="0" cellspacing="0" border="0" style="margin:{margin};">
<tr>
<td bgcolor="{bg}" style="border:1px solid {border};padding:{padding};font-family:{font};">
{content}
</td>
</tr>
</table>
<![endif]-->
<!--[if !mso]><!-->
<div style="background-color:{bg};border:1px solid {border};border-radius:{radius};padding:{padding};margin:{margin};width:{width};box-sizing:border-box;font-family:{font};">
{content}
</div>
<!--<![endif]-->"#,
        width = options.width,
        margin = options.margin,
        bg = options.background_color,
        border = options.border_color,
        radius = options.border_radius,
        padding = options.padding,
        font = FONT_STACK,
        content = content,
    )
}

/// Build a dual-syntax button linking to `href`.
///
/// The MSO branch is a `v:roundrect` VML shape with fixed pixel geometry,
/// since Outlook does not reliably render CSS buttons. The fallback branch
/// is a table-wrapped anchor. Both encode the same href and text.
pub fn create_button(text: &str, href: &str, options: &ButtonOptions) -> String {
    format!(
        r#"<!--[if mso]>
<v:roundrect xmlns:v="urn:schemas-microsoft-com:vml" xmlns:w="urn:schemas-microsoft-com:office:word" href="{href}" style="height:46px;v-text-anchor:middle;width:240px;" arcsize="14%" stroke="f" fillcolor="{bg}">
<w:anchorlock/>
<center style="color:{color};font-family:{font};font-size:{size};font-weight:{weight};">{text}</center>
</v:roundrect>
<![endif]-->
<!--[if !mso]><!-->
<table role="presentation" cellpadding="0" cellspacing="0" border="0" style="margin:20px 0;">
<tr>
<td align="center" bgcolor="{bg}" style="border-radius:{radius};">
<a href="{href}" style="display:inline-block;background-color:{bg};color:{color};padding:{padding};border-radius:{radius};font-family:{font};font-size:{size};font-weight:{weight};text-decoration:none;width:{width};text-align:center;">{text}</a>
</td>
</tr>
</table>
<!--<![endif]-->"#,
        href = href,
        bg = options.background_color,
        color = options.text_color,
        font = FONT_STACK,
        size = options.font_size,
        weight = options.font_weight,
        radius = options.border_radius,
        padding = options.padding,
        width = options.width,
        text = text,
    )
}

/// Build a table-wrapped heading with explicit inline styles.
///
/// The table row/cell makes margin and padding behave predictably inside
/// Outlook's table-based layouts; the inline styles remove any dependence
/// on an external stylesheet.
pub fn create_heading(text: &str, level: HeadingLevel, options: &HeadingOptions) -> String {
    let (color, size, weight, margin, padding) = level.defaults();
    let tag = level.tag();

    format!(
        r#"<table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0">
<tr>
<td style="padding:{padding};">
<{tag} style="color:{color};font-size:{size};font-weight:{weight};margin:{margin};padding:0;font-family:{font};">{text}</{tag}>
</td>
</tr>
</table>"#,
        padding = options.padding.as_deref().unwrap_or(padding),
        tag = tag,
        color = options.color.as_deref().unwrap_or(color),
        size = options.font_size.as_deref().unwrap_or(size),
        weight = options.font_weight.as_deref().unwrap_or(weight),
        margin = options.margin.as_deref().unwrap_or(margin),
        font = FONT_STACK,
        text = text,
    )
}
