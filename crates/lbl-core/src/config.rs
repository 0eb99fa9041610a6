use lbl_model::{DEFAULT_SPAN_CLASS, LabelCase};
use serde::Deserialize;

use crate::indicator::IndicatorDefaults;

/// Process-wide label settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Indicators used for `required: true` / `required: false`.
    pub indicators: IndicatorDefaults,
    /// Whether labels without explicit text are looked up in the localizer.
    ///
    /// `label: true` forces a lookup regardless.
    pub i18n_lookups_by_default: bool,
    /// Casing used by the default humanizer.
    pub label_case: LabelCase,
    /// Class applied to span-shaped labels that have none.
    pub span_class: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            indicators: IndicatorDefaults::default(),
            i18n_lookups_by_default: true,
            label_case: LabelCase::default(),
            span_class: DEFAULT_SPAN_CLASS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = LabelConfig::default();

        assert!(cfg.i18n_lookups_by_default);
        assert_eq!(cfg.label_case, LabelCase::Humanize);
        assert_eq!(cfg.span_class, "label");
        assert_eq!(cfg.indicators.optional.resolve(), "");
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let cfg: LabelConfig = serde_json::from_str("{}").unwrap();

        assert!(cfg.i18n_lookups_by_default);
        assert_eq!(cfg.span_class, "label");
        assert_eq!(
            cfg.indicators.required_marker(),
            r#"<abbr title="required">*</abbr>"#
        );
    }

    #[test]
    fn partial_deserialization() {
        let json = r#"{
            "indicators": {"optional": "(optional)"},
            "label_case": "titleize",
            "i18n_lookups_by_default": false
        }"#;
        let cfg: LabelConfig = serde_json::from_str(json).unwrap();

        assert_eq!(cfg.indicators.optional.resolve(), "(optional)");
        assert_eq!(
            cfg.indicators.required_marker(),
            r#"<abbr title="required">*</abbr>"#
        );
        assert_eq!(cfg.label_case, LabelCase::Titleize);
        assert!(!cfg.i18n_lookups_by_default);
        assert_eq!(cfg.span_class, "label");
    }
}
