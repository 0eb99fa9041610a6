use thiserror::Error;

/// Failure reported by a markup collaborator.
///
/// The label pipeline never produces these itself; it returns them unchanged.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid tag name: {0}")]
    InvalidTag(String),

    #[error("invalid attribute name: {0}")]
    InvalidAttribute(String),

    #[error("internal error: {0}")]
    Internal(String),
}
