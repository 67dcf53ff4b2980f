//! Error types for the gadget risk assessment crate.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`AnthropicError`]: Anthropic API specific errors
//! - [`EnrichmentError`]: Failures of the optional AI narrative step
//! - [`StorageError`]: Database operation errors
//! - [`ValidationError`]: Caller-side assessment input validation errors
//! - [`ConfigError`]: Configuration errors
//!
//! Scoring itself has no error type: it is infallible for well-typed input.
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// Scoring and persistence are independent operations, so a storage failure
/// surfaces as [`AppError::Storage`] and never as a scoring failure.
#[derive(Debug, Error)]
pub enum AppError {
    /// Anthropic API error.
    #[error("Anthropic API error: {0}")]
    Anthropic(#[from] AnthropicError),

    /// Enrichment error.
    #[error("Enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input could not be read or decoded.
    #[error("Input error: {message}")]
    Input {
        /// Description of the input failure.
        message: String,
    },
}

/// Anthropic API errors.
///
/// These errors represent failures when communicating with the Anthropic API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnthropicError {
    /// Authentication failed due to invalid API key.
    #[error("Authentication failed: invalid API key")]
    AuthenticationFailed,

    /// Request was rate limited.
    #[error("Rate limited: retry after {retry_after_seconds}s")]
    RateLimited {
        /// Seconds the server asked us to wait.
        retry_after_seconds: u64,
    },

    /// The requested model is overloaded.
    #[error("Model overloaded: {model}")]
    ModelOverloaded {
        /// The model that is overloaded.
        model: String,
    },

    /// Request timed out.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Invalid request parameters.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Description of what's invalid.
        message: String,
    },

    /// Network communication error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// Unexpected response from the API.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Description of what was unexpected.
        message: String,
    },
}

/// Enrichment errors.
///
/// Every variant is an expected outcome of the best-effort AI step. The
/// predictor turns any of them into an absent `ai_analysis`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnrichmentError {
    /// No API credential is configured.
    #[error("No text-generation credential configured")]
    CredentialMissing,

    /// The text-generation call failed.
    #[error("Text generation unavailable: {message}")]
    Api {
        /// Description of the API failure.
        message: String,
    },

    /// The response contained no parseable JSON.
    #[error("JSON parsing failed: {message}")]
    JsonParseFailed {
        /// Description of the parsing error.
        message: String,
    },

    /// The JSON did not match the expected analysis shape.
    #[error("Response did not match the expected shape: {message}")]
    SchemaViolation {
        /// Description of the mismatch.
        message: String,
    },

    /// A prompt was empty after trimming.
    #[error("Prompt must not be empty")]
    EmptyPrompt,
}

/// Storage errors.
///
/// These errors represent failures in database operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed (may be truncated).
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// Database migration failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },

    /// A write was attempted without a user ID.
    #[error("User ID is required")]
    MissingUserId,

    /// A stored payload could not be encoded or decoded.
    #[error("Serialization failed: {message}")]
    Serialization {
        /// Description of the serialization failure.
        message: String,
    },

    /// Internal storage error.
    #[error("Internal storage error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Assessment input validation errors.
///
/// Raised by the caller-side check before scoring. The scorer never
/// produces these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A field is outside its allowed range.
    #[error("Invalid value for {field}: {reason}")]
    OutOfRange {
        /// The field name.
        field: String,
        /// Why the value is invalid.
        reason: String,
    },

    /// Per-category app usage adds up to more than a day.
    #[error("Social media, productivity and gaming hours add up to {total}, more than 24")]
    HoursExceedDay {
        /// The summed hours.
        total: f64,
    },

    /// The location is not one of the known regions.
    #[error("Unknown location: {location}")]
    UnknownLocation {
        /// The rejected location.
        location: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
