use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    AS_SPAN_KEY, Attributes, BOOLEAN_ATTRIBUTES, FieldName, INPUT_NAME_KEY, LABEL_HTML_KEY,
    LABEL_KEY, LABEL_PREFIX_KEY, ModelError, ModelResult, REQUIRED_KEY,
    options::{LabelHtml, LabelText, Requirement},
};

/// Options accepted by a `label` call.
///
/// Recognized keys are typed fields; everything else is kept in
/// [`LabelOptions::attributes`] and passed through to the markup primitive.
/// The value is never mutated by rendering: [`LabelOptions::into_parts`]
/// splits it into the recognized values and the pass-through remainder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Value")]
pub struct LabelOptions {
    label: Option<LabelText>,
    required: Option<Requirement>,
    as_span: bool,
    input_name: Option<FieldName>,
    nested_prefix: Option<String>,
    label_html: LabelHtml,
    attributes: Attributes,
}

/// Recognized option values, split off by [`LabelOptions::into_parts`].
#[derive(Debug, Clone, Default)]
pub struct RecognizedOptions {
    pub label: Option<LabelText>,
    pub required: Option<Requirement>,
    pub as_span: bool,
    pub input_name: Option<FieldName>,
    pub nested_prefix: Option<String>,
    pub label_html: LabelHtml,
}

impl LabelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<LabelText>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Shorthand for `label: false`.
    pub fn without_label(self) -> Self {
        self.with_label(LabelText::Suppressed)
    }

    pub fn with_required(mut self, required: impl Into<Requirement>) -> Self {
        self.required = Some(required.into());
        self
    }

    pub fn with_as_span(mut self, as_span: bool) -> Self {
        self.as_span = as_span;
        self
    }

    pub fn with_input_name(mut self, input_name: impl Into<FieldName>) -> Self {
        self.input_name = Some(input_name.into());
        self
    }

    pub fn with_nested_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.nested_prefix = Some(prefix.into());
        self
    }

    pub fn with_label_html(mut self, label_html: impl Into<LabelHtml>) -> Self {
        self.label_html = label_html.into();
        self
    }

    /// Add a pass-through attribute.
    pub fn with_attr(mut self, key: impl Into<String>, val: impl Into<String>) -> Self {
        self.attributes.insert(key, val);
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn label(&self) -> Option<&LabelText> {
        self.label.as_ref()
    }

    /// Returns `true` for `label: false`.
    pub fn is_suppressed(&self) -> bool {
        self.label.as_ref().is_some_and(LabelText::is_suppressed)
    }

    pub fn requirement(&self) -> Option<&Requirement> {
        self.required.as_ref()
    }

    pub fn is_span(&self) -> bool {
        self.as_span
    }

    pub fn input_name(&self) -> Option<&FieldName> {
        self.input_name.as_ref()
    }

    pub fn nested_prefix(&self) -> Option<&str> {
        self.nested_prefix.as_deref()
    }

    pub fn label_html(&self) -> &LabelHtml {
        &self.label_html
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Options for a sibling renderer that labels an input on its behalf.
    ///
    /// Keeps only `label` and `required`, then merges `label_html` over them:
    /// a `label` or `required` given there wins, its other entries become the
    /// attributes of the result. `self` is left untouched.
    pub fn for_label(&self) -> LabelOptions {
        let html = &self.label_html;
        LabelOptions {
            label: html.label.clone().or_else(|| self.label.clone()),
            required: html.required.clone().or_else(|| self.required.clone()),
            attributes: html.attributes.clone(),
            ..LabelOptions::default()
        }
    }

    /// Split into recognized values and pass-through attributes.
    pub fn into_parts(self) -> (RecognizedOptions, Attributes) {
        let recognized = RecognizedOptions {
            label: self.label,
            required: self.required,
            as_span: self.as_span,
            input_name: self.input_name,
            nested_prefix: self.nested_prefix,
            label_html: self.label_html,
        };
        (recognized, self.attributes)
    }

    /// Build options from a JSON object.
    ///
    /// `label: false` wins over everything else: the remaining keys are not
    /// inspected and the result renders as an empty string.
    ///
    /// # Examples
    /// ```
    /// use lbl_model::{LabelOptions, LabelText};
    /// use serde_json::json;
    ///
    /// let opts = LabelOptions::from_json(&json!({"label": "Title", "class": "big"})).unwrap();
    /// assert_eq!(opts.label(), Some(&LabelText::Text("Title".into())));
    /// assert_eq!(opts.attributes().get("class"), Some("big"));
    ///
    /// let off = LabelOptions::from_json(&json!({"label": false, "required": [1]})).unwrap();
    /// assert!(off.is_suppressed());
    /// ```
    pub fn from_json(value: &Value) -> ModelResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| ModelError::NotAnObject(value.to_string()))?;

        if matches!(obj.get(LABEL_KEY), Some(Value::Bool(false))) {
            return Ok(LabelOptions::new().without_label());
        }

        let mut out = LabelOptions::new();
        for (key, val) in obj {
            match key.as_str() {
                LABEL_KEY => out.label = LabelText::from_json(val)?,
                REQUIRED_KEY => out.required = Requirement::from_json(val)?,
                AS_SPAN_KEY => out.as_span = is_truthy(val),
                INPUT_NAME_KEY => out.input_name = string_option(key, val)?.map(FieldName::from),
                LABEL_PREFIX_KEY => out.nested_prefix = string_option(key, val)?,
                LABEL_HTML_KEY => out.label_html = label_html_from_json(key, val)?,
                _ => {
                    if let Some(s) = attribute_value(key, val)? {
                        out.attributes.insert(key.as_str(), s);
                    }
                }
            }
        }
        Ok(out)
    }
}

impl TryFrom<Value> for LabelOptions {
    type Error = ModelError;
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(&value)
    }
}

/// Anything but `null` and `false` is truthy.
fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

fn string_option(key: &str, value: &Value) -> ModelResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(ModelError::invalid(key, format!("expected string, got {other}"))),
    }
}

/// Coerce a scalar attribute value to its string form; `null` drops the attribute.
///
/// Booleans follow the HTML tag helper: a boolean attribute renders as its own
/// name when `true` and is dropped when `false`; other attributes keep the
/// literal `"true"`/`"false"`.
fn attribute_value(key: &str, value: &Value) -> ModelResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(b) if BOOLEAN_ATTRIBUTES.contains(&key) => Ok(b.then(|| key.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(ModelError::invalid(
            key,
            format!("attribute values must be scalars, got {other}"),
        )),
    }
}

fn label_html_from_json(key: &str, value: &Value) -> ModelResult<LabelHtml> {
    let obj: &Map<String, Value> = match value {
        Value::Null => return Ok(LabelHtml::default()),
        Value::Object(obj) => obj,
        other => {
            return Err(ModelError::invalid(key, format!("expected object, got {other}")));
        }
    };

    let mut html = LabelHtml::default();
    for (k, v) in obj {
        match k.as_str() {
            LABEL_KEY => html.label = LabelText::from_json(v)?,
            REQUIRED_KEY => html.required = Requirement::from_json(v)?,
            _ => {
                if let Some(s) = attribute_value(k, v)? {
                    html.attributes.insert(k.as_str(), s);
                }
            }
        }
    }
    Ok(html)
}
