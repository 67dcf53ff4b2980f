//! Configuration range checks.

use super::Config;
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (5 minutes).
pub const MAX_TIMEOUT_MS: u64 = 300_000;

/// Largest response budget the enrichment and assistant calls may request.
pub const MAX_TOKENS_LIMIT: u32 = 8192;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - `REQUEST_TIMEOUT_MS` is outside 1000..=300000
/// - `ANTHROPIC_MODEL` is empty
/// - `MAX_TOKENS` is outside 1..=8192
/// - `DATABASE_PATH` is empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.request_timeout_ms < MIN_TIMEOUT_MS || config.request_timeout_ms > MAX_TIMEOUT_MS {
        return Err(ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT_MS".into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
        });
    }

    if config.model.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "ANTHROPIC_MODEL".into(),
            reason: "must not be empty".into(),
        });
    }

    if config.max_tokens == 0 || config.max_tokens > MAX_TOKENS_LIMIT {
        return Err(ConfigError::InvalidValue {
            var: "MAX_TOKENS".into(),
            reason: format!("must be between 1 and {MAX_TOKENS_LIMIT}"),
        });
    }

    if config.database_path.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "DATABASE_PATH".into(),
            reason: "must not be empty".into(),
        });
    }

    Ok(())
}
