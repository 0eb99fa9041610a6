use crate::{
    Attributes,
    options::{LabelText, Requirement},
};

/// Label-specific options nested under `label_html`.
///
/// `label` and `required` given here take precedence over the outer options
/// in [`LabelOptions::for_label`](crate::LabelOptions::for_label); every other
/// entry is an attribute of the label element.
#[derive(Debug, Clone, Default)]
pub struct LabelHtml {
    pub(crate) label: Option<LabelText>,
    pub(crate) required: Option<Requirement>,
    pub(crate) attributes: Attributes,
}

impl LabelHtml {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<LabelText>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_required(mut self, required: impl Into<Requirement>) -> Self {
        self.required = Some(required.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, val: impl Into<String>) -> Self {
        self.attributes.insert(key, val);
        self
    }

    pub fn label(&self) -> Option<&LabelText> {
        self.label.as_ref()
    }

    pub fn requirement(&self) -> Option<&Requirement> {
        self.required.as_ref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.required.is_none() && self.attributes.is_empty()
    }
}

impl From<Attributes> for LabelHtml {
    fn from(attributes: Attributes) -> Self {
        Self {
            attributes,
            ..Self::default()
        }
    }
}
