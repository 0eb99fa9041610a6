use serde_json::Value;

use crate::{Indicator, ModelError, ModelResult, REQUIRED_KEY};

/// Value of the `required` option.
#[derive(Debug, Clone)]
pub enum Requirement {
    /// `required: true`: use the configured required indicator.
    Required,
    /// `required: false`: use the configured optional indicator.
    Optional,
    /// Any other value is the indicator itself.
    Custom(Indicator),
}

impl Requirement {
    /// Parse a JSON option value. `null` means the option is unset.
    ///
    /// Numbers are accepted and stringified.
    pub(crate) fn from_json(value: &Value) -> ModelResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(Requirement::from(*b))),
            Value::String(s) => Ok(Some(Requirement::Custom(Indicator::literal(s.clone())))),
            Value::Number(n) => Ok(Some(Requirement::Custom(Indicator::literal(n.to_string())))),
            other => Err(ModelError::invalid(
                REQUIRED_KEY,
                format!("expected boolean, string or number, got {other}"),
            )),
        }
    }
}

impl From<bool> for Requirement {
    fn from(b: bool) -> Self {
        if b {
            Requirement::Required
        } else {
            Requirement::Optional
        }
    }
}

impl From<Indicator> for Requirement {
    fn from(ind: Indicator) -> Self {
        Requirement::Custom(ind)
    }
}

impl From<&str> for Requirement {
    fn from(s: &str) -> Self {
        Requirement::Custom(Indicator::literal(s))
    }
}

impl From<String> for Requirement {
    fn from(s: String) -> Self {
        Requirement::Custom(Indicator::literal(s))
    }
}
