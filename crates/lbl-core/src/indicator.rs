//! Turns a `required` directive into indicator text.
use lbl_model::{Indicator, Requirement};
use serde::Deserialize;

/// Marker used for `required: true` when no indicator is configured.
pub const DEFAULT_REQUIRED_MARKER: &str = r#"<abbr title="required">*</abbr>"#;

/// Default indicators for `required: true` and `required: false`.
///
/// `required` stays `None` unless set explicitly, so a markup layer can tell
/// a configured marker from the built-in [`DEFAULT_REQUIRED_MARKER`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IndicatorDefaults {
    pub required: Option<Indicator>,
    pub optional: Indicator,
}

impl IndicatorDefaults {
    /// Resolved `required: true` marker.
    pub fn required_marker(&self) -> String {
        self.required
            .as_ref()
            .map_or_else(|| DEFAULT_REQUIRED_MARKER.to_string(), Indicator::resolve)
    }
}

/// Resolve the indicator text for a `required` directive.
///
/// Deferred indicators are evaluated here. An unset directive yields `""`.
pub fn resolve_requirement(required: Option<&Requirement>, defaults: &IndicatorDefaults) -> String {
    match required {
        None => String::new(),
        Some(Requirement::Required) => defaults.required_marker(),
        Some(Requirement::Optional) => defaults.optional.resolve(),
        Some(Requirement::Custom(ind)) => ind.resolve(),
    }
}
