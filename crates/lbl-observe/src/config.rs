use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::object::{LogFormat, LogLevel};

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Filter expression (`"warn"`, `"lbl_core=trace,info"`).
    pub level: LogLevel,
    /// Include module targets in events.
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LogConfig {
    /// Color only when enabled and stderr is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = LogConfig::default();

        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.level.as_str(), "warn");
        assert!(config.with_targets);
        assert!(config.use_color);
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let config: LogConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.level.as_str(), LogLevel::default().as_str());
        assert_eq!(config.format, LogFormat::default());
        assert!(config.with_targets);
    }

    #[test]
    fn partial_deserialization() {
        let json = r#"{"format": "json", "level": "lbl_core=debug"}"#;
        let config: LogConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level.as_str(), "lbl_core=debug");
        assert!(config.use_color);
    }

    #[test]
    fn rejects_invalid_level_in_config() {
        let json = r#"{"level": "lbl_core=loud"}"#;
        assert!(serde_json::from_str::<LogConfig>(json).is_err());
    }
}
