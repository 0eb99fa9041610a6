//! Logging setup for the `lbl` binaries.
mod config;
mod error;
mod log;
mod object;

pub use config::LogConfig;
pub use error::LogError;
pub use object::{LogFormat, LogLevel};

/// Install the global tracing subscriber described by `cfg`.
///
/// Events go to stderr, so stdout stays reserved for rendered output.
/// Fails with [`LogError::AlreadyInitialized`] when called twice.
///
/// ```rust
/// use lbl_observe::{LogConfig, init_logging};
///
/// init_logging(&LogConfig::default()).expect("logger");
/// tracing::info!("logger ready");
/// ```
pub fn init_logging(cfg: &LogConfig) -> Result<(), LogError> {
    match cfg.format {
        LogFormat::Text => log::init_text(cfg),
        LogFormat::Json => log::init_json(cfg),
    }
}
