//! Console configuration (`config.toml`)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use appconsole_api::{ClientOptions, Realm};

/// Environment variable overriding [`ConsoleConfig::api_base_url`].
pub const API_BASE_ENV: &str = "APPCONSOLE_API_BASE";

const APP_DIR: &str = "appconsole";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_API_BASE: &str = "http://localhost:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings of a console installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Backend base URL.
    pub api_base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries for idempotent requests.
    pub max_retries: u32,
    /// Realm the login page starts with.
    pub realm: Realm,
    /// UI language code (`en-US`, `id-ID`).
    pub language: String,
    /// Fallback primary color when the app config has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    /// Where the key-value store and logs live. Defaults to the platform
    /// data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: 30,
            max_retries: 2,
            realm: Realm::Admin,
            language: "en-US".to_string(),
            theme_color: None,
            data_dir: None,
        }
    }
}

impl ConsoleConfig {
    /// `<config dir>/appconsole/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(CONFIG_FILE)
    }

    /// Load from the default path, then apply the environment override.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::default_path())?;
        config.apply_env_override(std::env::var(API_BASE_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// A non-blank override replaces the configured base URL.
    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(value) = value.map(|v| v.trim().to_string()) {
            if !value.is_empty() {
                log::info!("{API_BASE_ENV} overrides api_base_url");
                self.api_base_url = value;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api_base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must start with http:// or https://, got '{base}'"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// Data directory, falling back to `<data dir>/appconsole`.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        })
    }

    pub fn client_options(&self) -> ClientOptions {
        let mut options = ClientOptions::new(self.api_base_url.trim());
        options.request_timeout = Duration::from_secs(self.timeout_secs);
        options.max_retries = self.max_retries;
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: ConsoleConfig = toml::from_str(
            r#"
            api_base_url = "https://cms.example.id"
            realm = "member"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://cms.example.id");
        assert_eq!(config.realm, Realm::Member);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.language, "en-US");
    }

    #[test]
    fn blank_env_override_is_ignored() {
        let mut config = ConsoleConfig::default();
        config.apply_env_override(Some("   ".into()));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
        config.apply_env_override(Some("https://staging.example.id".into()));
        assert_eq!(config.api_base_url, "https://staging.example.id");
    }

    #[test]
    fn base_url_needs_a_scheme() {
        let config = ConsoleConfig {
            api_base_url: "cms.example.id".into(),
            ..ConsoleConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn client_options_follow_config() {
        let config = ConsoleConfig {
            timeout_secs: 5,
            max_retries: 0,
            ..ConsoleConfig::default()
        };
        let options = config.client_options();
        assert_eq!(options.request_timeout, Duration::from_secs(5));
        assert_eq!(options.max_retries, 0);
    }
}
