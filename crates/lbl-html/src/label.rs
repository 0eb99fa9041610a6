use lbl_core::{BaseLabelRenderer, RenderError, TagRenderer};
use lbl_model::{Attributes, FOR_ATTR, FieldName};

use crate::tag::HtmlTagRenderer;

/// Renders `<label for="…">text</label>` for fields of a form object.
///
/// The `for` target is [`dom_id`] of the object name and the binding field,
/// unless the attributes already carry one.
#[derive(Debug, Clone, Default)]
pub struct HtmlLabelRenderer {
    object_name: Option<String>,
    tags: HtmlTagRenderer,
}

impl HtmlLabelRenderer {
    /// Renderer for fields without an enclosing form object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer for fields of `object_name` (e.g. `post`, `post[author_attributes]`).
    pub fn for_object(object_name: impl Into<String>) -> Self {
        Self {
            object_name: Some(object_name.into()),
            tags: HtmlTagRenderer,
        }
    }

    pub fn object_name(&self) -> Option<&str> {
        self.object_name.as_deref()
    }
}

impl BaseLabelRenderer for HtmlLabelRenderer {
    fn label(&self, binding: &FieldName, text: &str, attrs: &Attributes) -> Result<String, RenderError> {
        let mut attrs = attrs.clone();
        attrs.insert_if_absent(FOR_ATTR, dom_id(self.object_name.as_deref(), binding));
        self.tags.content_tag("label", text, &attrs)
    }
}

/// DOM id of a field: `{object}_{field}`.
///
/// `][` and characters outside `[-a-zA-Z0-9:.]` in the object name become `_`,
/// one trailing `_` is dropped; a trailing `?` is dropped from the field.
pub fn dom_id(object_name: Option<&str>, field: &FieldName) -> String {
    let field = field.as_str();
    let field = field.strip_suffix('?').unwrap_or(field);

    match object_name {
        Some(object) if !object.is_empty() => format!("{}_{field}", sanitize_object_name(object)),
        _ => field.to_string(),
    }
}

fn sanitize_object_name(name: &str) -> String {
    let replaced: String = name
        .replace("][", "_")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    match replaced.strip_suffix('_') {
        Some(trimmed) => trimmed.to_string(),
        None => replaced,
    }
}
