//! Well-known option keys and attribute names.
//!
//! Option keys are the names accepted in a JSON options object; everything
//! else in that object passes through as a rendering attribute.

/// Explicit label text, `false` to suppress the label, `true` to force a lookup.
pub const LABEL_KEY: &str = "label";

/// Required/optional directive (boolean or a custom indicator).
pub const REQUIRED_KEY: &str = "required";

/// Render a `span` container instead of a `label` element.
pub const AS_SPAN_KEY: &str = "as_span";

/// Field the rendered label binds to, when it differs from the described field.
pub const INPUT_NAME_KEY: &str = "input_name";

/// Text prepended to the final label (labels wrapping a nested control).
pub const LABEL_PREFIX_KEY: &str = "label_prefix_for_nested_input";

/// Nested label-specific attributes, merged by [`crate::LabelOptions::for_label`].
pub const LABEL_HTML_KEY: &str = "label_html";

pub const CLASS_ATTR: &str = "class";
pub const FOR_ATTR: &str = "for";

/// HTML attributes rendered as `name="name"` when `true` and omitted when `false`.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "allowpaymentrequest",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "compact",
    "controls",
    "declare",
    "default",
    "defaultchecked",
    "defaultmuted",
    "defaultselected",
    "defer",
    "disabled",
    "enabled",
    "formnovalidate",
    "hidden",
    "indeterminate",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nohref",
    "nomodule",
    "noresize",
    "noshade",
    "novalidate",
    "nowrap",
    "open",
    "pauseonexit",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "scoped",
    "seamless",
    "selected",
    "sortable",
    "truespeed",
    "typemustmatch",
    "visible",
];

/// Class applied to span-shaped labels when the caller set none.
pub const DEFAULT_SPAN_CLASS: &str = "label";

/// Localization scope used for label lookups.
pub const LABELS_SCOPE: &str = "labels";
