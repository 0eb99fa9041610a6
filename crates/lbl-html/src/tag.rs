use lbl_core::{RenderError, TagRenderer};
use lbl_model::Attributes;

use crate::escape::escape_html;

/// Renders `<tag k="v">content</tag>`.
///
/// Attribute values are escaped; content is inserted as-is, since label text
/// carries indicator markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTagRenderer;

impl HtmlTagRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TagRenderer for HtmlTagRenderer {
    fn content_tag(&self, tag: &str, content: &str, attrs: &Attributes) -> Result<String, RenderError> {
        if !is_valid_tag(tag) {
            return Err(RenderError::InvalidTag(tag.to_string()));
        }

        let mut out = format!("<{tag}");
        for (key, val) in attrs.iter() {
            if !is_valid_attribute(key) {
                return Err(RenderError::InvalidAttribute(key.to_string()));
            }
            out.push_str(&format!(" {key}=\"{}\"", escape_html(val)));
        }
        out.push('>');
        out.push_str(content);
        out.push_str(&format!("</{tag}>"));
        Ok(out)
    }
}

fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric() || c == '-'),
        _ => false,
    }
}

fn is_valid_attribute(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '='))
}
