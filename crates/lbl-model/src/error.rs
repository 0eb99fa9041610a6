use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("label options must be a JSON object, got: {0}")]
    NotAnObject(String),

    #[error("invalid value for option '{key}': {reason}")]
    InvalidOption { key: String, reason: String },

    #[error("unknown label case: {0}")]
    UnknownLabelCase(String),
}

impl ModelError {
    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        ModelError::InvalidOption {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
