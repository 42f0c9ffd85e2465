// crates/coffeeshop-config/src/config.rs
// ============================================================================
// Module: Coffee Shop Environment Configuration
// Description: Configuration loading and validation for the Coffee Shop app.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, thiserror, toml, url
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Missing or invalid configuration fails closed: an [`EnvironmentConfig`]
//! that escapes [`EnvironmentConfig::load`] has passed every validation rule.
//!
//! Defaults reproduce the development environment literal, so an empty file
//! (or no overrides at all) yields the local development configuration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "coffeeshop.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "COFFEESHOP_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a configured URL.
pub(crate) const MAX_URL_LENGTH: usize = 2048;
/// Maximum total length of the identity-provider hostname.
pub(crate) const MAX_HOSTNAME_LENGTH: usize = 253;
/// Maximum length of a single hostname label.
pub(crate) const MAX_HOSTNAME_LABEL_LENGTH: usize = 63;
/// Maximum length of the identity-provider audience identifier.
pub(crate) const MAX_AUDIENCE_LENGTH: usize = 256;
/// Maximum length of the identity-provider client identifier.
pub(crate) const MAX_CLIENT_ID_LENGTH: usize = 128;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Coffee Shop environment configuration.
///
/// One flat record plus the nested `[auth0]` table. The record is plain
/// owned data: load it once, pass it by reference, never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Flag indicating build/deployment mode.
    #[serde(default)]
    pub production: bool,
    /// Base address of the backend HTTP service.
    #[serde(default = "default_api_server_url")]
    pub api_server_url: String,
    /// Allow `http://` URLs in production mode (explicit opt-in).
    #[serde(default)]
    pub allow_insecure_http: bool,
    /// Identity-provider configuration.
    #[serde(default)]
    pub auth0: Auth0Config,
    /// Optional config source metadata (not serialized).
    #[serde(skip)]
    pub source_modified_at: Option<SystemTime>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            production: false,
            api_server_url: default_api_server_url(),
            allow_insecure_http: false,
            auth0: Auth0Config::default(),
            source_modified_at: None,
        }
    }
}

impl EnvironmentConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit path, then the `COFFEESHOP_CONFIG`
    /// environment variable, then `coffeeshop.toml` in the working
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.source_modified_at = fs::metadata(&resolved).and_then(|meta| meta.modified()).ok();
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let require_https = self.production && !self.allow_insecure_http;
        let api_url = validate_url("api_server_url", &self.api_server_url)?;
        if require_https && api_url.scheme() != "https" {
            return Err(ConfigError::Invalid(
                "api_server_url requires https:// in production (set allow_insecure_http to \
                 override)"
                    .to_string(),
            ));
        }
        self.auth0.validate(require_https)?;
        Ok(())
    }

    /// Returns whether the configuration targets a production deployment.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        self.production
    }
}

/// Identity-provider (Auth0) configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Auth0Config {
    /// Identity-provider domain (bare hostname, no scheme).
    #[serde(default = "default_auth0_url")]
    pub url: String,
    /// Audience identifier configured for the Auth0 application.
    #[serde(default = "default_auth0_audience")]
    pub audience: String,
    /// Public client identifier generated for the Auth0 application.
    #[serde(default = "default_auth0_client_id")]
    pub client_id: String,
    /// Redirect target after the authentication handshake completes.
    #[serde(default = "default_auth0_callback_url")]
    pub callback_url: String,
}

impl Default for Auth0Config {
    fn default() -> Self {
        Self {
            url: default_auth0_url(),
            audience: default_auth0_audience(),
            client_id: default_auth0_client_id(),
            callback_url: default_auth0_callback_url(),
        }
    }
}

impl Auth0Config {
    /// Validates identity-provider configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when identity-provider settings are invalid.
    fn validate(&self, require_https: bool) -> Result<(), ConfigError> {
        validate_hostname("auth0.url", &self.url)?;
        validate_audience("auth0.audience", &self.audience)?;
        validate_client_id("auth0.client_id", &self.client_id)?;
        let callback = validate_url("auth0.callback_url", &self.callback_url)?;
        if require_https && callback.scheme() != "https" {
            return Err(ConfigError::Invalid(
                "auth0.callback_url requires https:// in production (set allow_insecure_http to \
                 override)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a configured URL field and returns the parsed value.
fn validate_url(field: &str, value: &str) -> Result<Url, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_URL_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    let url = Url::parse(trimmed)
        .map_err(|_| ConfigError::Invalid(format!("{field} must be a valid URL")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Invalid(format!("{field} must use http:// or https://")));
    }
    if url.host_str().is_none() {
        return Err(ConfigError::Invalid(format!("{field} must include a host")));
    }
    Ok(url)
}

/// Validates a bare RFC 1123 hostname (identity-provider domain).
fn validate_hostname(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.contains("://") {
        return Err(ConfigError::Invalid(format!(
            "{field} must be a bare hostname without scheme"
        )));
    }
    if trimmed.len() > MAX_HOSTNAME_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    let labels: Vec<&str> = trimmed.split('.').collect();
    if labels.len() < 2 {
        return Err(ConfigError::Invalid(format!("{field} must contain at least two labels")));
    }
    for label in labels {
        if label.is_empty() || label.len() > MAX_HOSTNAME_LABEL_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} label length out of range")));
        }
        if !label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-') {
            return Err(ConfigError::Invalid(format!("{field} contains invalid characters")));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(ConfigError::Invalid(format!(
                "{field} labels must not start or end with a hyphen"
            )));
        }
    }
    Ok(())
}

/// Validates the identity-provider audience identifier.
fn validate_audience(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.len() > MAX_AUDIENCE_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Invalid(format!("{field} must not contain whitespace")));
    }
    Ok(())
}

/// Validates the identity-provider client identifier.
fn validate_client_id(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.len() > MAX_CLIENT_ID_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    if !value.chars().all(|ch| ch.is_ascii_alphanumeric()) {
        return Err(ConfigError::Invalid(format!("{field} must be alphanumeric")));
    }
    Ok(())
}

/// Default backend API base URL (local Flask development server).
pub(crate) fn default_api_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

/// Default identity-provider domain.
pub(crate) fn default_auth0_url() -> String {
    "hadi-alnehlawi.eu.auth0.com".to_string()
}

/// Default identity-provider audience identifier.
pub(crate) fn default_auth0_audience() -> String {
    "coffeshop".to_string()
}

/// Default identity-provider client identifier.
pub(crate) fn default_auth0_client_id() -> String {
    "Edn6kp5ncXj1XslT1NeEVeUR7oakGSG4".to_string()
}

/// Default callback URL (local Ionic development server).
pub(crate) fn default_auth0_callback_url() -> String {
    "http://localhost:8100".to_string()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
