use serde_json::Value;

use crate::{FieldName, LABEL_KEY, ModelError, ModelResult};

/// Value of the `label` option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelText {
    /// Literal label text; no lookup is made.
    Text(String),
    /// `label: false`: render nothing at all.
    Suppressed,
    /// `label: true`: look the text up even if lookups are off by default.
    Lookup,
    /// Look the text up under another attribute key.
    LookupKey(FieldName),
}

impl LabelText {
    pub fn is_suppressed(&self) -> bool {
        matches!(self, LabelText::Suppressed)
    }

    /// Literal text, if this is [`LabelText::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LabelText::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Parse a JSON option value. `null` means the option is unset.
    pub(crate) fn from_json(value: &Value) -> ModelResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(LabelText::from(*b))),
            Value::String(s) => Ok(Some(LabelText::Text(s.clone()))),
            other => Err(ModelError::invalid(
                LABEL_KEY,
                format!("expected string or boolean, got {other}"),
            )),
        }
    }
}

impl From<bool> for LabelText {
    fn from(b: bool) -> Self {
        if b {
            LabelText::Lookup
        } else {
            LabelText::Suppressed
        }
    }
}

impl From<&str> for LabelText {
    fn from(s: &str) -> Self {
        LabelText::Text(s.to_string())
    }
}

impl From<String> for LabelText {
    fn from(s: String) -> Self {
        LabelText::Text(s)
    }
}
