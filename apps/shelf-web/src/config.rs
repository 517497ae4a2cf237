//! # Configuration
//!
//! Server and status line settings.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHELF_BIND_ADDR=0.0.0.0                                            │
//! │     SHELF_PORT=9000                                                    │
//! │     SHELF_FEEDBACK_SECS=10                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $SHELF_CONFIG, or                                                  │
//! │     ~/.config/shelf/shelf.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.shelf.shelf/shelf.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     127.0.0.1:8080, status cleared after 5 seconds                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [server]
//! bind_addr = "127.0.0.1"
//! port = 8080
//!
//! [feedback]
//! clear_after_secs = 5
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shelf_core::DEFAULT_STATUS_CLEAR_SECS;
use tracing::{debug, info, warn};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SHELF_CONFIG";

// =============================================================================
// Server Settings
// =============================================================================

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind address (default: 127.0.0.1, local only).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

// =============================================================================
// Feedback Settings
// =============================================================================

/// Status line behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSettings {
    /// Seconds a status message stays visible.
    #[serde(default = "default_clear_after")]
    pub clear_after_secs: u64,
}

fn default_clear_after() -> u64 {
    DEFAULT_STATUS_CLEAR_SECS
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        FeedbackSettings {
            clear_after_secs: default_clear_after(),
        }
    }
}

impl FeedbackSettings {
    pub fn clear_after(&self) -> Duration {
        Duration::from_secs(self.clear_after_secs)
    }
}

// =============================================================================
// App Configuration
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub feedback: FeedbackSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$SHELF_CONFIG`, or the platform path)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                Self::from_toml(&contents)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; missing sections and keys take defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue(
                "server.port must be greater than 0".into(),
            ));
        }

        if self.server.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "server.bind_addr cannot be blank".into(),
            ));
        }

        if self.feedback.clear_after_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "feedback.clear_after_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides from a variable lookup (the process environment in
    /// [`AppConfig::load`]).
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(addr) = var("SHELF_BIND_ADDR") {
            debug!(bind_addr = %addr, "Overriding bind address from environment");
            self.server.bind_addr = addr;
        }

        if let Some(port) = var("SHELF_PORT") {
            match port.parse::<u16>() {
                Ok(p) => self.server.port = p,
                Err(_) => warn!(port = %port, "Ignoring invalid SHELF_PORT"),
            }
        }

        if let Some(secs) = var("SHELF_FEEDBACK_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.feedback.clear_after_secs = s,
                Err(_) => warn!(secs = %secs, "Ignoring invalid SHELF_FEEDBACK_SECS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shelf", "shelf")
            .map(|dirs| dirs.config_dir().join("shelf.toml"))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidValue(String),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.feedback.clear_after(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.bind_addr, "127.0.0.1");
        assert_eq!(config.feedback.clear_after_secs, 5);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = AppConfig::from_toml("[server\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(vars(&[
            ("SHELF_BIND_ADDR", "0.0.0.0"),
            ("SHELF_PORT", "9100"),
            ("SHELF_FEEDBACK_SECS", "12"),
        ]));

        assert_eq!(config.server.bind_address(), "0.0.0.0:9100");
        assert_eq!(config.feedback.clear_after_secs, 12);
    }

    #[test]
    fn test_invalid_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(vars(&[("SHELF_PORT", "not-a-port")]));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.feedback.clear_after_secs = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_missing_path_uses_defaults() {
        let path = std::env::temp_dir().join("shelf-config-that-does-not-exist.toml");
        let config = AppConfig::load(Some(path)).unwrap();
        assert_eq!(config.server.port, AppConfig::default().server.port);
    }
}
