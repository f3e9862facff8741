//! HTML rendering of field sets.
//!
//! The emitted tag vocabulary is fixed and bounded: definition list,
//! paragraph, strong/emphasis, anchor, image, unordered list, line break.
//! Extracted values are embedded without escaping: authority responses are
//! treated as trusted input, and a value may legitimately carry markup the
//! consuming page expects raw.

use crate::config::LINK_TARGET;
use crate::fields::{FieldSet, FieldValue};

/// Wrap a URL in a hyperlink.
#[must_use]
pub fn hyperlink(href: &str, text: &str) -> String {
    format!(r#"<a href="{href}">{text}</a>"#)
}

/// Build an attribution paragraph naming the authority and linking back to
/// the subject URI.
///
/// The link carries a fixed `target` so repeated dereferences reuse the
/// same browsing context.
///
/// # Arguments
/// * `intro` - Lead-in text including any grammatical article (e.g. "Een term uit de")
/// * `name` - Authority display name, used as the link text
/// * `uri` - Subject URI the link points back to
#[must_use]
pub fn attribution(intro: &str, name: &str, uri: &str) -> String {
    format!(r#"<p><strong>{intro} <a target="{LINK_TARGET}" href="{uri}">{name}</a>:</strong></p>"#)
}

/// Render a field set as an HTML definition list.
///
/// Emits one `<dt>/<dd>` pair per entry in insertion order. An empty field
/// set yields an empty (but well-formed) `<dl></dl>`.
#[must_use]
pub fn definition_list(fields: &FieldSet) -> String {
    let mut out = String::from("<dl>");
    for (label, value) in fields {
        out.push_str("<dt>");
        out.push_str(label);
        out.push_str("</dt><dd>");
        out.push_str(&render_value(value));
        out.push_str("</dd>");
    }
    out.push_str("</dl>");
    out
}

/// Render a definition list prefixed by an attribution paragraph.
#[must_use]
pub fn attributed_definition_list(
    intro: &str,
    name: &str,
    uri: &str,
    fields: &FieldSet,
) -> String {
    format!("{}{}", attribution(intro, name, uri), definition_list(fields))
}

fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Link { href, text } => hyperlink(href, text),
        FieldValue::Images(images) => images
            .iter()
            .map(|img| format!(r#"<img src="{}" title="{}">"#, img.src, img.title))
            .collect(),
        FieldValue::List(items) => {
            let mut out = String::from("<ul>");
            for item in items {
                out.push_str("<li>");
                out.push_str(&render_value(item));
                out.push_str("</li>");
            }
            out.push_str("</ul>");
            out
        }
    }
}
