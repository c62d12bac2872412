//! Configuration Module
//! API endpoint settings, loaded from a TOML file with environment overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {message}")]
    Invalid { message: String },
}

/// Default config file next to the binary; `SSG_CONFIG` points elsewhere.
pub const DEFAULT_CONFIG_PATH: &str = "ssg.toml";

fn default_ports_path() -> String {
    "/ports".to_string()
}

fn default_rates_path() -> String {
    "/rates".to_string()
}

/// Remote API settings.
///
/// `base_url` and `api_key` must be provided (file or environment); the
/// endpoint paths default to the upstream layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_ports_path")]
    pub ports_path: String,
    #[serde(default = "default_rates_path")]
    pub rates_path: String,
}

impl ApiConfig {
    /// Load from `SSG_CONFIG` (or `ssg.toml`), then apply `SSG_BASE_URL` /
    /// `SSG_API_KEY` overrides and validate.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SSG_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let config = Self::from_file(&path)?;
        config
            .with_overrides(
                std::env::var("SSG_BASE_URL").ok(),
                std::env::var("SSG_API_KEY").ok(),
            )
            .validated()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Environment values win over file values when present and non-empty.
    pub fn with_overrides(mut self, base_url: Option<String>, api_key: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
        if let Some(key) = api_key.filter(|v| !v.is_empty()) {
            self.api_key = key;
        }
        self
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Invalid {
                message: "base_url is required (file or SSG_BASE_URL)".to_string(),
            });
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                message: format!("base_url must be an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::Invalid {
                message: "api_key is required (file or SSG_API_KEY)".to_string(),
            });
        }
        Ok(self)
    }

    pub fn ports_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.ports_path)
    }

    pub fn rates_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.rates_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_full_config_from_toml() {
        let file = write_config(
            r#"
base_url = "https://rates.example.com"
api_key = "secret"
ports_path = "/v2/ports"
rates_path = "/v2/rates"
"#,
        );

        let config = ApiConfig::from_file(file.path()).unwrap().validated().unwrap();
        assert_eq!(config.ports_url(), "https://rates.example.com/v2/ports");
        assert_eq!(config.rates_url(), "https://rates.example.com/v2/rates");
        assert_eq!(config.api_key, "secret");
    }

    #[test]
    fn endpoint_paths_have_defaults() {
        let file = write_config(
            r#"
base_url = "https://rates.example.com"
api_key = "secret"
"#,
        );

        let config = ApiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.ports_path, "/ports");
        assert_eq!(config.rates_path, "/rates");
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let file = write_config(
            r#"
base_url = "https://rates.example.com/"
api_key = "secret"
"#,
        );

        let config = ApiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.ports_url(), "https://rates.example.com/ports");
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let file = write_config(
            r#"
base_url = "https://file.example.com"
api_key = "file-key"
"#,
        );

        let config = ApiConfig::from_file(file.path())
            .unwrap()
            .with_overrides(
                Some("https://env.example.com".to_string()),
                Some("env-key".to_string()),
            );
        assert_eq!(config.base_url, "https://env.example.com");
        assert_eq!(config.api_key, "env-key");
    }

    #[test]
    fn empty_override_keeps_file_value() {
        let file = write_config(
            r#"
base_url = "https://file.example.com"
api_key = "file-key"
"#,
        );

        let config = ApiConfig::from_file(file.path())
            .unwrap()
            .with_overrides(Some(String::new()), None);
        assert_eq!(config.base_url, "https://file.example.com");
        assert_eq!(config.api_key, "file-key");
    }

    #[test]
    fn missing_api_key_fails_validation() {
        let file = write_config(r#"base_url = "https://rates.example.com""#);
        let err = ApiConfig::from_file(file.path()).unwrap().validated();
        assert!(matches!(err, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn non_http_base_url_fails_validation() {
        let file = write_config(
            r#"
base_url = "ftp://rates.example.com"
api_key = "secret"
"#,
        );
        let err = ApiConfig::from_file(file.path()).unwrap().validated();
        assert!(matches!(err, Err(ConfigError::Invalid { .. })));
    }
}
