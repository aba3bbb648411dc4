//! Client configuration

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "NOSTOS_API_URL";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL, endpoints are appended verbatim
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Token refresh endpoint, relative to the base URL
    #[serde(default = "default_refresh_path")]
    pub refresh_path: String,
    /// Login entry point handed to the session-expired hook
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Request timeout in seconds (0 disables it)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_refresh_path() -> String {
    "/token/refresh/".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("nostos-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            refresh_path: default_refresh_path(),
            login_path: default_login_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from `NOSTOS_API_URL` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        config
    }

    /// Load configuration from defaults, an optional file and `NOSTOS__*` variables
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        builder = builder.add_source(Config::try_from(&ClientConfig::from_env())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        // NOSTOS__BASE_URL, NOSTOS__TIMEOUT_SECS, ...
        builder = builder.add_source(
            Environment::with_prefix("NOSTOS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.refresh_path, "/token/refresh/");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert!(config.user_agent.starts_with("nostos-client/"));
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "base_url = \"https://api.nostos.test/api\"").unwrap();
        writeln!(file, "timeout_secs = 5").unwrap();

        let config = ClientConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "https://api.nostos.test/api");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.refresh_path, "/token/refresh/");
    }
}
