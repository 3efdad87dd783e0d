use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, str::FromStr};
use thiserror::Error;
use url::Url;

/// Environment variable overriding [`ClientConfig::api_base_url`].
pub const API_URL_ENV: &str = "FITZ_API_URL";
/// Environment variable overriding [`ClientConfig::log_level`].
pub const LOG_LEVEL_ENV: &str = "FITZ_LOG_LEVEL";
/// Environment variable overriding [`ClientConfig::session_path`].
pub const SESSION_PATH_ENV: &str = "FITZ_SESSION_PATH";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors raised while loading or validating a [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yml::Error),
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported configuration format `{0}`. Use 'yaml' or 'json'.")]
    UnsupportedFormat(String),
    #[error("Invalid API base URL `{0}`: must be an absolute http or https URL")]
    InvalidApiUrl(String),
    #[error("Invalid log level `{0}`: expected one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Conventional file name for this format.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Yaml => "config.yaml",
            Self::Json => "config.json",
        }
    }

    fn from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        extension.parse()
    }
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Settings shared by native clients of the remote API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the remote API, including any path prefix
    pub api_base_url: String,

    /// Logging level
    pub log_level: String,

    /// Where the session is persisted; the platform config directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ClientConfig {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            log_level: "info".to_string(),
            session_path: None,
        }
    }

    /// Loads the configuration from a file, environment variables, or defaults.
    ///
    /// Precedence, lowest first: defaults, the file, environment variables
    /// (only for values the file left at their default), then
    /// `api_url_override`.
    ///
    /// # Errors
    /// Unreadable or malformed files, unsupported extensions, and values that
    /// fail [`ClientConfig::validate`].
    pub fn load_config(
        config_path: Option<PathBuf>,
        api_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::with_defaults();
        let mut config = match config_path {
            Some(path) => {
                let content = fs::read_to_string(&path)?;
                match ConfigFormat::from_path(&path)? {
                    ConfigFormat::Yaml => serde_yml::from_str(&content)?,
                    ConfigFormat::Json => serde_json::from_str(&content)?,
                }
            }
            None => defaults.clone(),
        };

        if config.api_base_url == defaults.api_base_url {
            if let Ok(url) = env::var(API_URL_ENV) {
                config.api_base_url = url;
            }
        }
        if config.log_level == defaults.log_level {
            if let Ok(level) = env::var(LOG_LEVEL_ENV) {
                config.log_level = level;
            }
        }
        if config.session_path.is_none() {
            if let Ok(path) = env::var(SESSION_PATH_ENV) {
                config.session_path = Some(PathBuf::from(path));
            }
        }

        if let Some(url) = api_url_override {
            config.api_base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks the base URL and log level.
    ///
    /// # Errors
    /// The first invalid value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match Url::parse(&self.api_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidApiUrl(self.api_base_url.clone())),
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }

    /// Serializes the configuration in `format`.
    ///
    /// # Errors
    /// Serializer failures.
    pub fn render(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        Ok(match format {
            ConfigFormat::Yaml => serde_yml::to_string(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }
}
