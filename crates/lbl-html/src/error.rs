use thiserror::Error;

#[derive(Debug, Error)]
pub enum HtmlError {
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
