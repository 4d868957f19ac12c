//! Runtime configuration.
//!
//! Everything has a default, so the panel runs without a config file.  When
//! one exists it is TOML:
//!
//! ```toml
//! base_url = "http://localhost:8080"
//! default_limit = 10
//! poll_interval_ms = 5000
//!
//! [logging]
//! level = "info"
//! file = "news-panel.log"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{PanelError, Result};

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "NEWS_PANEL_CONFIG";

/// Config file looked up in the working directory when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "news-panel.toml";

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_limit() -> u32 {
    10
}

fn default_poll_interval_ms() -> u64 {
    5_000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "news-panel.log".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path.  The terminal UI owns stdout, so logs only go here.
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Scheme and authority of the news API, e.g. `http://localhost:8080`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of items requested by a full refresh.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    /// Period of the unseen-count check.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_limit: default_limit(),
            poll_interval_ms: default_poll_interval_ms(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the config file from [`CONFIG_ENV`] or [`DEFAULT_CONFIG_FILE`]
    /// and load it.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            // An explicitly named file must exist.
            Ok(path) if !path.is_empty() => Self::load(path),
            _ => Self::load_or_default(DEFAULT_CONFIG_FILE),
        }
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(s)
            .map_err(|e| PanelError::Config(format!("config parse error: {e}")))?;
        config.normalize();
        Ok(config)
    }

    /// Replace the base URL (command-line override).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.normalize();
        self
    }

    fn normalize(&mut self) {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.len() != self.base_url.len() {
            self.base_url = trimmed.to_string();
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(PanelError::Config("base_url must not be empty".into()));
        }
        if self.default_limit == 0 {
            return Err(PanelError::Config(
                "default_limit must be at least 1".into(),
            ));
        }
        if self.poll_interval_ms == 0 {
            return Err(PanelError::Config(
                "poll_interval_ms must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
