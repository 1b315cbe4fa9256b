//! API server configuration, loadable from TOML and overridable from the
//! environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::FixedOffset;
use serde::Deserialize;

/// Environment variable naming a TOML config file.
pub const CONFIG_PATH_VAR: &str = "DOT_CONFIG";

/// Top-level API server configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// JSON snapshot file. None serves the built-in sample data.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Offset from UTC, in minutes, used to turn "now" into today's date.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// Artificial delay before answering `/ask`.
    #[serde(default)]
    pub thinking_delay_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("UTC offset out of range: {0} minutes")]
    InvalidOffset(i32),
}

impl ApiConfig {
    /// Load from `DOT_CONFIG` (if set), then apply `DOT_*` overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|var| std::env::var(var).ok())
    }

    /// [`load`](Self::load) with an injectable variable lookup.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        base.with_overrides(lookup)
    }

    /// Load config from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&contents)?;
        config.utc_offset()?;
        Ok(config)
    }

    /// Apply `DOT_HOST`, `DOT_PORT`, `DOT_DATA_FILE`,
    /// `DOT_UTC_OFFSET_MINUTES` and `DOT_THINKING_DELAY_MS`.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup("DOT_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("DOT_PORT") {
            self.port = parse_env("DOT_PORT", port)?;
        }
        if let Some(path) = lookup("DOT_DATA_FILE") {
            self.data_file = (!path.trim().is_empty()).then(|| PathBuf::from(path));
        }
        if let Some(minutes) = lookup("DOT_UTC_OFFSET_MINUTES") {
            self.utc_offset_minutes = parse_env("DOT_UTC_OFFSET_MINUTES", minutes)?;
        }
        if let Some(ms) = lookup("DOT_THINKING_DELAY_MS") {
            self.thinking_delay_ms = parse_env("DOT_THINKING_DELAY_MS", ms)?;
        }
        self.utc_offset()?;
        Ok(self)
    }

    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_minutes))
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: None,
            utc_offset_minutes: 0,
            thinking_delay_ms: 0,
        }
    }
}
