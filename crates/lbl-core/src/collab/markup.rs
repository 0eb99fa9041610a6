use lbl_model::{Attributes, FieldName};

use crate::error::RenderError;

/// Renders a plain label element bound to a field.
///
/// This is the undecorated primitive: it must not add required/optional
/// indicators, the pipeline has already appended them to `text`.
pub trait BaseLabelRenderer: Send + Sync {
    fn label(&self, binding: &FieldName, text: &str, attrs: &Attributes) -> Result<String, RenderError>;
}

/// Renders an arbitrary element with content and attributes.
pub trait TagRenderer: Send + Sync {
    fn content_tag(&self, tag: &str, content: &str, attrs: &Attributes) -> Result<String, RenderError>;
}
