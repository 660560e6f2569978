//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::decorate::DecorateConfig;
use crate::models::Style;
use crate::replace::TimestampScanner;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Settings for plain-text replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceConfig {
    /// Style timestamps are rewritten into
    #[serde(default = "default_replace_style")]
    pub style: Style,

    /// Only rewrite timestamps followed by this pattern (empty: all)
    #[serde(default)]
    pub suffix_pattern: String,
}

fn default_replace_style() -> Style {
    Style::Numeric
}

impl Default for ReplaceConfig {
    fn default() -> Self {
        Self {
            style: default_replace_style(),
            suffix_pattern: String::new(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub replace: ReplaceConfig,

    #[serde(default)]
    pub decorate: DecorateConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            replace: ReplaceConfig::default(),
            decorate: DecorateConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Unknown log level: {}",
                self.log_level
            )));
        }

        for (name, pattern) in [
            ("replace.suffix_pattern", &self.replace.suffix_pattern),
            ("decorate.suffix_pattern", &self.decorate.suffix_pattern),
        ] {
            TimestampScanner::with_suffix(pattern)
                .map_err(|e| ConfigError::ValidationError(format!("{}: {}", name, e)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.replace.style, Style::Numeric);
        assert_eq!(config.replace.suffix_pattern, "");
        assert_eq!(config.decorate.suffix_pattern, " [-—]");
        assert_eq!(config.decorate.style, Style::Short);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_log_level() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_config_validation_bad_suffix() {
        let mut config = AppConfig::default();
        config.decorate.suffix_pattern = "(".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("decorate.suffix_pattern"));
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
            log_level = "debug"

            [replace]
            style = "long"

            [decorate]
            required_heading = "my notes"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.replace.style, Style::Long);
        assert_eq!(config.decorate.required_heading.as_deref(), Some("my notes"));
        assert_eq!(config.decorate.link_suffix, " —");
    }

    #[test]
    fn test_unknown_style_rejected() {
        let result = AppConfig::from_toml("[replace]\nstyle = \"fancy\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[decorate]\nlink_suffix = \" -\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.decorate.link_suffix, " -");
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
