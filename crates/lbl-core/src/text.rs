//! Label text resolution: explicit text, then translation, then the humanized
//! field name, followed by the indicator and the nested-input prefix.
use lbl_model::{FieldName, LabelText, Requirement};
use tracing::trace;

use crate::{
    collab::{Humanizer, Localizer},
    context::LabelContext,
    indicator::resolve_requirement,
};

/// Inputs of the text resolver, borrowed from the recognized options.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSources<'a> {
    pub explicit: Option<&'a str>,
    pub label: Option<&'a LabelText>,
    pub required: Option<&'a Requirement>,
    pub nested_prefix: Option<&'a str>,
}

/// Resolve the final label text.
///
/// Returns `None` for `label: false`; nothing else is consulted in that case.
pub fn resolve_text(ctx: &LabelContext, field: &FieldName, sources: TextSources<'_>) -> Option<String> {
    if sources.label.is_some_and(LabelText::is_suppressed) {
        return None;
    }

    let mut text = base_text(ctx, field, sources.explicit, sources.label);
    text.push_str(&resolve_requirement(sources.required, &ctx.config().indicators));

    match sources.nested_prefix {
        Some(prefix) => Some(format!("{prefix}{text}")),
        None => Some(text),
    }
}

/// Undecorated text: first non-absent of explicit text, translation, humanized name.
fn base_text(
    ctx: &LabelContext,
    field: &FieldName,
    explicit: Option<&str>,
    label: Option<&LabelText>,
) -> String {
    if let Some(text) = explicit {
        trace!(field = %field, source = "explicit", "label text resolved");
        return text.to_string();
    }

    let lookup_key = match label {
        Some(LabelText::Text(text)) => {
            trace!(field = %field, source = "option", "label text resolved");
            return text.clone();
        }
        Some(LabelText::Lookup) => Some(field),
        Some(LabelText::LookupKey(key)) => Some(key),
        Some(LabelText::Suppressed) | None => {
            ctx.config().i18n_lookups_by_default.then_some(field)
        }
    };

    if let Some(key) = lookup_key {
        if let Some(text) = translate(ctx, key) {
            trace!(field = %field, key = %key, source = "localized", "label text resolved");
            return text;
        }
    }

    trace!(field = %field, source = "humanized", "label text resolved");
    ctx.humanizer().humanize(field)
}

/// Blank translations count as missing.
fn translate(ctx: &LabelContext, key: &FieldName) -> Option<String> {
    let query = ctx.scope().query(key);
    ctx.localizer()
        .translate(&query)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
