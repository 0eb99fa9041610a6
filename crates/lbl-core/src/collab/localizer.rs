use lbl_model::{FieldName, LABELS_SCOPE};

/// Everything a localizer may use to find a label translation.
///
/// `model`, `nested_model` and `action` come from the [`crate::LookupScope`]
/// of the rendering context; implementations decide how to cascade through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupQuery<'a> {
    pub attribute: &'a FieldName,
    pub scope: &'static str,
    pub model: Option<&'a str>,
    pub nested_model: Option<&'a str>,
    pub action: Option<&'a str>,
}

impl<'a> LookupQuery<'a> {
    /// Query in the labels scope without any model context.
    pub fn label(attribute: &'a FieldName) -> Self {
        Self {
            attribute,
            scope: LABELS_SCOPE,
            model: None,
            nested_model: None,
            action: None,
        }
    }
}

/// Translation lookup.
pub trait Localizer: Send + Sync {
    /// Returns `None` when no translation exists.
    fn translate(&self, query: &LookupQuery<'_>) -> Option<String>;
}

/// Localizer without any translations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl Localizer for NoTranslations {
    #[inline(always)]
    fn translate(&self, _: &LookupQuery<'_>) -> Option<String> {
        None
    }
}
