//! Application configuration loaded from a TOML file.
//!
//! The `[toll]` section carries the two constants that directly determine the
//! charged amount (consolidation window, daily cap). They are mandatory and
//! must be positive; a missing or invalid value is fatal at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address the REST API binds to
    pub api_host: String,
    /// Port the REST API listens on
    pub api_port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Path to the SQLite database file
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "./tollgate.db".to_string(),
        }
    }
}

impl DatabaseSettings {
    /// Build the SeaORM connection URL
    pub fn connection_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path)
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level filter (e.g. "info", "tollgate=debug")
    pub level: String,
    /// Output format: "plain" or "json"
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "plain".to_string(),
        }
    }
}

/// Toll calculation constants.
///
/// No serde defaults here: these two values determine the billed amount and
/// must be stated explicitly in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TollSettings {
    /// Duration of the single-charge window in minutes
    pub free_passage_minutes: u32,
    /// Maximum total fee charged per calendar day
    pub max_daily_fee: i32,
}

impl Default for TollSettings {
    fn default() -> Self {
        Self {
            free_passage_minutes: 60,
            max_daily_fee: 60,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    pub toll: TollSettings,
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toll.free_passage_minutes == 0 {
            return Err(ConfigError::Invalid(
                "toll.free_passage_minutes must be a positive integer".to_string(),
            ));
        }
        if self.toll.max_daily_fee <= 0 {
            return Err(ConfigError::Invalid(
                "toll.max_daily_fee must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default config file location (~/.config/tollgate/config.toml)
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tollgate")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            api_host = "127.0.0.1"
            api_port = 9090

            [database]
            path = "/tmp/toll.db"

            [logging]
            level = "debug"
            format = "json"

            [toll]
            free_passage_minutes = 60
            max_daily_fee = 60
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.api_port, 9090);
        assert_eq!(cfg.database.connection_url(), "sqlite:///tmp/toll.db?mode=rwc");
        assert_eq!(cfg.logging.format, "json");
        assert_eq!(cfg.toll.free_passage_minutes, 60);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_toll_section_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [server]
            api_port = 9090
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_max_daily_fee_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [toll]
            free_passage_minutes = 60
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn zero_window_is_rejected() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [toll]
            free_passage_minutes = 0
            max_daily_fee = 60
            "#,
        )
        .unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_daily_cap_is_rejected() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [toll]
            free_passage_minutes = 60
            max_daily_fee = -5
            "#,
        )
        .unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn omitted_sections_fall_back_to_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [toll]
            free_passage_minutes = 30
            max_daily_fee = 80
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.api_host, "0.0.0.0");
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.toll.max_daily_fee, 80);
    }
}
