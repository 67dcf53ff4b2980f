//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with `.env` support)
//! - Configuration validation
//! - Default value handling
//! - Secure API key storage via [`SecretString`]
//!
//! The API key is optional. Without it the deterministic score is still
//! produced; only the AI narrative and the chat assistant are unavailable.
//!
//! # Example
//!
//! ```
//! use gadget_risk::config::{Config, SecretString, DEFAULT_MODEL};
//!
//! let config = Config {
//!     api_key: Some(SecretString::new("sk-ant-example-key")),
//!     database_path: "./data/gadget_risk.db".to_string(),
//!     log_level: "info".to_string(),
//!     request_timeout_ms: 30_000,
//!     model: DEFAULT_MODEL.to_string(),
//!     max_tokens: 2048,
//! };
//!
//! assert!(config.enrichment_enabled());
//! let debug = format!("{:?}", config);
//! assert!(debug.contains("<REDACTED>"));
//! assert!(!debug.contains("sk-ant-example-key"));
//! ```

mod secret;
mod validation;

pub use secret::SecretString;
pub use validation::{validate_config, MAX_TIMEOUT_MS, MAX_TOKENS_LIMIT, MIN_TIMEOUT_MS};

use crate::error::ConfigError;

/// Default database path.
pub const DEFAULT_DATABASE_PATH: &str = "./data/gadget_risk.db";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Default Anthropic model.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default response token budget.
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Anthropic API key; `None` disables enrichment and the assistant.
    pub api_key: Option<SecretString>,
    /// Database path.
    pub database_path: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Request timeout in milliseconds for text-generation calls.
    pub request_timeout_ms: u64,
    /// Anthropic model to use.
    pub model: String,
    /// Maximum tokens to request per completion.
    pub max_tokens: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `ANTHROPIC_API_KEY`: API key; unset or blank disables enrichment
    /// - `DATABASE_PATH`: Path to `SQLite` database (default: `./data/gadget_risk.db`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `REQUEST_TIMEOUT_MS`: Request timeout (default: `30000`)
    /// - `ANTHROPIC_MODEL`: Model to use (default: `claude-sonnet-4-20250514`)
    /// - `MAX_TOKENS`: Response token budget (default: `2048`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a numeric variable does not parse or any
    /// value fails validation (see [`validate_config`]).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .and_then(SecretString::non_empty);

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into());

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let request_timeout_ms = parse_env_u64("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;

        let model = std::env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let max_tokens = parse_env_u32("MAX_TOKENS", DEFAULT_MAX_TOKENS)?;

        let config = Self {
            api_key,
            database_path,
            log_level,
            request_timeout_ms,
            model,
            max_tokens,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Whether a text-generation credential is available.
    #[must_use]
    pub const fn enrichment_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}
