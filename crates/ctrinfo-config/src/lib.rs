//! Configuration management for ctrinfo
//!
//! Handles which console backend to query, logging and report output.
//! Configuration is read from TOML files and can be overridden through
//! `CTRINFO__<SECTION>__<KEY>` environment variables.

mod settings;

pub use settings::{DeviceConfig, LoggingConfig, ReportConfig, ReportFormat};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration source error: {0}")]
    Source(#[from] config::ConfigError),
}

/// Standard configuration paths
pub const CONFIG_DIR: &str = "/etc/ctrinfo";
pub const CONFIG_FILE: &str = "config.toml";
/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "CTRINFO";

/// Main ctrinfo configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtrInfoConfig {
    #[serde(default)]
    pub device: DeviceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl CtrInfoConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a file with environment overrides on top
    pub fn load_layered(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layered_with_env(path, None)
    }

    /// Like [`Self::load_layered`], reading overrides from `env` instead of
    /// the process environment when given
    pub fn load_layered_with_env(
        path: &Path,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Self::build(Some(path), env)
    }

    /// Load configuration from default locations
    pub fn load_default() -> Result<Self, ConfigError> {
        // Try user config first, then system config
        if let Some(user_config) = user_config_path().filter(|path| path.exists()) {
            return Self::load_layered(&user_config);
        }

        let system_config = Path::new(CONFIG_DIR).join(CONFIG_FILE);
        if system_config.exists() {
            return Self::load_layered(&system_config);
        }

        tracing::debug!("No configuration file found, using defaults");
        Self::build(None, None)
    }

    fn build(
        file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .source(env),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;
        tracing::info!("Configuration saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.logging.is_valid_level() {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}', expected one of {}",
                self.logging.level,
                LoggingConfig::LEVELS.join(", ")
            )));
        }

        if self.device.profile.trim().is_empty() && self.device.profile_file.is_none() {
            return Err(ConfigError::Invalid(
                "device.profile or device.profile_file must be set".to_string(),
            ));
        }

        Ok(())
    }
}

/// `$HOME/.config/ctrinfo/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("ctrinfo")
            .join(CONFIG_FILE)
    })
}
