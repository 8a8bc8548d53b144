//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::client::{default_user_agent, ClientConfig};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Env var naming an explicit config file.
pub const ENV_CONFIG: &str = "BOOKCAT_CONFIG";
/// Env var overriding `api_url`.
pub const ENV_API_URL: &str = "BOOKCAT_API_URL";
/// Env var overriding `export_dir`.
pub const ENV_EXPORT_DIR: &str = "BOOKCAT_EXPORT_DIR";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path is empty or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/bookcat/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the catalog API.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Directory exports are written to.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Whole-request timeout in seconds. `0` disables the timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// `User-Agent` header for API requests.
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Base URL of the catalog API.
    pub api_url: String,
    /// Directory exports are written to.
    pub export_dir: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Request timeout; `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    /// `User-Agent` header.
    pub user_agent: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            export_dir: PathBuf::from("."),
            log_file_path: default_log_path(),
            request_timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ResolvedConfig {
    /// Settings for the HTTP client.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: self.request_timeout,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/bookcat/bookcat.log` on Linux, or the platform
/// equivalent. Falls back to the current directory if no state directory
/// is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("bookcat").join("bookcat.log")
    } else {
        PathBuf::from("bookcat.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if the path is empty, or the file exists but cannot be read
/// or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidPath("empty path".to_string()));
    }

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path: `~/.config/bookcat/config.toml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bookcat").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BOOKCAT_CONFIG` environment variable
/// 3. Default path `~/.config/bookcat/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_url: config.api_url.unwrap_or(defaults.api_url),
        export_dir: config.export_dir.unwrap_or(defaults.export_dir),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        request_timeout: match config.request_timeout_secs {
            Some(0) | None => defaults.request_timeout,
            Some(secs) => Some(Duration::from_secs(secs)),
        },
        user_agent: config.user_agent.unwrap_or(defaults.user_agent),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BOOKCAT_API_URL`: Override api_url
/// - `BOOKCAT_EXPORT_DIR`: Override export_dir
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var(ENV_API_URL) {
        config.api_url = url;
    }

    if let Ok(dir) = std::env::var(ENV_EXPORT_DIR) {
        config.export_dir = PathBuf::from(dir);
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only flags the user actually passed are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    api_url_override: Option<String>,
    export_dir_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(url) = api_url_override {
        config.api_url = url;
    }

    if let Some(dir) = export_dir_override {
        config.export_dir = dir;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
