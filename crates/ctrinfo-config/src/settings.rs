//! Configuration sections

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which console backend to query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Mock profile name, e.g. `new3dsxl`
    pub profile: String,
    /// TOML hardware description, takes precedence over `profile`
    pub profile_file: Option<PathBuf>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            profile: "new3dsxl".to_string(),
            profile_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LoggingConfig {
    pub const LEVELS: [&'static str; 5] = ["trace", "debug", "info", "warn", "error"];

    pub fn is_valid_level(&self) -> bool {
        Self::LEVELS.contains(&self.level.to_lowercase().as_str())
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(DeviceConfig::default().profile, "new3dsxl");
        assert!(DeviceConfig::default().profile_file.is_none());
        assert_eq!(LoggingConfig::default().level, "warn");
        assert_eq!(ReportConfig::default().format, ReportFormat::Text);
    }

    #[test]
    fn test_log_levels() {
        let mut logging = LoggingConfig::default();
        assert!(logging.is_valid_level());

        logging.level = "DEBUG".to_string();
        assert!(logging.is_valid_level());

        logging.level = "verbose".to_string();
        assert!(!logging.is_valid_level());
    }
}
