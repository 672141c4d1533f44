//! Logging configuration

use serde::Deserialize;

use super::ValidationError;

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let level = self.level.to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(ValidationError::InvalidLogLevel(self.level.clone()));
        }
        Ok(())
    }

    pub fn is_json(&self) -> bool {
        self.format == LogFormat::Json
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, LogFormat::Pretty);
        assert!(!logging.is_json());
    }

    #[test]
    fn test_levels_are_case_insensitive() {
        let logging = LoggingConfig {
            level: "DEBUG".to_string(),
            ..LoggingConfig::default()
        };
        assert!(logging.validate().is_ok());
    }

    #[test]
    fn test_unknown_level_rejected() {
        let logging = LoggingConfig {
            level: "chatty".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(
            logging.validate(),
            Err(ValidationError::InvalidLogLevel("chatty".to_string()))
        );
    }

    #[test]
    fn test_format_deserialization() {
        let logging: LoggingConfig =
            serde_json::from_str(r#"{"level": "warn", "format": "json"}"#).unwrap();
        assert!(logging.is_json());
        assert_eq!(logging.level, "warn");
    }
}
