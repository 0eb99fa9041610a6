mod format;
pub use format::LogFormat;

mod level;
pub use level::LogLevel;

mod rfc3339;
pub use rfc3339::UtcRfc3339;
