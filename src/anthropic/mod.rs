//! Anthropic API client.
//!
//! This module provides:
//! - Direct Claude API integration over `reqwest`
//! - Request validation with size limits
//! - Status-code mapping to [`AnthropicError`](crate::error::AnthropicError)
//!
//! The client never retries. A failed call is reported once and the caller
//! decides what to fall back to.
//!
//! # Example
//!
//! ```no_run
//! use gadget_risk::anthropic::{AnthropicClient, ClientConfig};
//! use gadget_risk::config::SecretString;
//! use gadget_risk::traits::{CompletionConfig, Message, TextGenerationClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnthropicClient::new(SecretString::new("sk-ant-xxx"), ClientConfig::default())?;
//! let response = client
//!     .complete(vec![Message::user("Hello")], CompletionConfig::new())
//!     .await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod types;

pub use client::{AnthropicClient, MAX_CONTENT_LENGTH, MAX_MESSAGES};
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TIMEOUT_MS,
};
pub use types::{ApiMessage, ApiRequest, ApiResponse, ApiUsage, ContentBlock, GenerationResponse};
