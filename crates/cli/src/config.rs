//! CLI configuration utilities

use anyhow::{Context, Result};
use nostos_client::ClientConfig;
use std::path::{Path, PathBuf};

/// Environment variable overriding the state directory
pub const STATE_DIR_ENV: &str = "NOSTOS_STATE_DIR";

/// Load the client configuration, then apply the `--api-url` override
pub fn load_client_config(path: Option<&Path>, api_url: Option<String>) -> Result<ClientConfig> {
    let mut config = ClientConfig::load(path).with_context(|| match path {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Failed to load configuration".to_string(),
    })?;

    if let Some(url) = api_url {
        config.base_url = url;
    }

    Ok(config)
}

/// Directory holding the CLI's persistent state
pub fn state_dir() -> PathBuf {
    // Check environment variable first, then fall back to system data dir
    if let Ok(dir) = std::env::var(STATE_DIR_ENV) {
        PathBuf::from(dir)
    } else {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nostos")
    }
}

/// Session file location, unless one was given explicitly
pub fn session_file(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| state_dir().join("session.json"))
}
