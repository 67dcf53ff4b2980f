//! Anthropic API client.
//!
//! This module provides:
//! - HTTP client for the Anthropic Messages API
//! - Request validation
//! - Response parsing
//!
//! Every call is a single attempt. Callers treat a failure as final.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::config::ClientConfig;
use super::types::{ApiMessage, ApiRequest, ApiResponse, ContentBlock, GenerationResponse};
use crate::config::SecretString;
use crate::error::{AnthropicError, EnrichmentError};
use crate::traits::{CompletionConfig, CompletionResponse, Message, TextGenerationClient, Usage};

/// Maximum number of messages per request.
pub const MAX_MESSAGES: usize = 100;
/// Maximum content length per message (50KB).
pub const MAX_CONTENT_LENGTH: usize = 50_000;

/// Anthropic API version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic API client.
#[derive(Debug)]
pub struct AnthropicClient {
    client: Client,
    api_key: SecretString,
    config: ClientConfig,
}

impl AnthropicClient {
    /// Create a new Anthropic client.
    pub fn new(api_key: SecretString, config: ClientConfig) -> Result<Self, AnthropicError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client =
            Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| AnthropicError::Network {
                    message: format!("Failed to create HTTP client: {e}"),
                })?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Create a client with default configuration.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, AnthropicError> {
        Self::new(SecretString::new(api_key), ClientConfig::default())
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request to the Messages API.
    pub async fn send(&self, request: ApiRequest) -> Result<GenerationResponse, AnthropicError> {
        Self::validate_request(&request)?;
        self.execute_once(&request).await
    }

    fn validate_request(request: &ApiRequest) -> Result<(), AnthropicError> {
        if request.messages.is_empty() {
            return Err(AnthropicError::InvalidRequest {
                message: "No messages".to_string(),
            });
        }

        if request.messages.len() > MAX_MESSAGES {
            return Err(AnthropicError::InvalidRequest {
                message: format!(
                    "Too many messages: {} > {}",
                    request.messages.len(),
                    MAX_MESSAGES
                ),
            });
        }

        for msg in &request.messages {
            let content_len = msg.content.len();
            if content_len > MAX_CONTENT_LENGTH {
                return Err(AnthropicError::InvalidRequest {
                    message: format!(
                        "Message too large: {} > {}",
                        content_len, MAX_CONTENT_LENGTH
                    ),
                });
            }
        }

        Ok(())
    }

    async fn execute_once(
        &self,
        request: &ApiRequest,
    ) -> Result<GenerationResponse, AnthropicError> {
        let url = format!("{}/messages", self.config.base_url);
        let start = std::time::Instant::now();

        tracing::debug!(
            url = %url,
            model = %request.model,
            max_tokens = request.max_tokens,
            timeout_ms = self.config.timeout_ms,
            "Starting Anthropic API request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let elapsed_ms = start.elapsed().as_millis();
                if e.is_timeout() {
                    tracing::error!(
                        url = %url,
                        elapsed_ms = elapsed_ms,
                        timeout_ms = self.config.timeout_ms,
                        "Anthropic API request timed out"
                    );
                    AnthropicError::Timeout {
                        timeout_ms: self.config.timeout_ms,
                    }
                } else {
                    tracing::error!(
                        url = %url,
                        elapsed_ms = elapsed_ms,
                        error = %e,
                        "Anthropic API request failed"
                    );
                    AnthropicError::Network {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        tracing::debug!(
            url = %url,
            status = %status,
            elapsed_ms = start.elapsed().as_millis(),
            "Anthropic API response received"
        );

        if status.as_u16() == 401 {
            return Err(AnthropicError::AuthenticationFailed);
        }

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(60);
            return Err(AnthropicError::RateLimited {
                retry_after_seconds: retry_after,
            });
        }

        if status.as_u16() == 529 {
            return Err(AnthropicError::ModelOverloaded {
                model: request.model.clone(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnthropicError::UnexpectedResponse {
                message: format!("Status {}: {}", status, body),
            });
        }

        let body: ApiResponse =
            response
                .json()
                .await
                .map_err(|e| AnthropicError::UnexpectedResponse {
                    message: format!("Failed to parse response: {e}"),
                })?;

        Self::parse_response(body)
    }

    fn parse_response(response: ApiResponse) -> Result<GenerationResponse, AnthropicError> {
        let raw_text = response
            .content
            .iter()
            .filter_map(ContentBlock::as_text)
            .collect::<Vec<_>>()
            .join("\n");

        if raw_text.is_empty() {
            return Err(AnthropicError::UnexpectedResponse {
                message: "No content in response".to_string(),
            });
        }

        Ok(GenerationResponse::new(raw_text, response.usage))
    }

    fn build_request(&self, messages: Vec<Message>, config: &CompletionConfig) -> ApiRequest {
        let api_messages: Vec<ApiMessage> = messages
            .into_iter()
            .map(|m| {
                if m.is_user() {
                    ApiMessage::user(m.content)
                } else {
                    ApiMessage::assistant(m.content)
                }
            })
            .collect();

        let max_tokens = config.max_tokens.unwrap_or(self.config.max_tokens);
        let mut request = ApiRequest::new(&self.config.model, max_tokens, api_messages);

        if let Some(temp) = config.temperature {
            request = request.with_temperature(f64::from(temp));
        }

        if let Some(system) = config.system_prompt.as_ref() {
            request = request.with_system(system);
        }

        request
    }
}

#[async_trait]
impl TextGenerationClient for AnthropicClient {
    async fn complete(
        &self,
        messages: Vec<Message>,
        config: CompletionConfig,
    ) -> Result<CompletionResponse, EnrichmentError> {
        let request = self.build_request(messages, &config);

        let response = self
            .send(request)
            .await
            .map_err(|e| EnrichmentError::Api {
                message: e.to_string(),
            })?;

        Ok(CompletionResponse::new(
            response.raw_text,
            Usage::new(response.usage.input_tokens, response.usage.output_tokens),
        ))
    }
}

#[async_trait]
impl TextGenerationClient for Arc<AnthropicClient> {
    async fn complete(
        &self,
        messages: Vec<Message>,
        config: CompletionConfig,
    ) -> Result<CompletionResponse, EnrichmentError> {
        <AnthropicClient as TextGenerationClient>::complete(self.as_ref(), messages, config).await
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unused_async
)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_client(server: &MockServer) -> AnthropicClient {
        let config = ClientConfig::default()
            .with_base_url(server.uri())
            .with_model("claude-test")
            .with_timeout_ms(5_000);
        AnthropicClient::new(SecretString::new("test-api-key"), config).unwrap()
    }

    fn success_response_body(text: &str) -> serde_json::Value {
        json!({
            "id": "msg_123",
            "content": [{"type": "text", "text": text}],
            "model": "claude-test",
            "usage": {"input_tokens": 10, "output_tokens": 20},
            "stop_reason": "end_turn"
        })
    }

    #[test]
    fn test_client_new() {
        let client = AnthropicClient::with_api_key("test-key").unwrap();
        assert_eq!(client.base_url(), "https://api.anthropic.com/v1");
    }

    #[test]
    fn test_client_debug_redacts_key() {
        let client = AnthropicClient::with_api_key("sk-ant-secret").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("AnthropicClient"));
        assert!(!debug.contains("sk-ant-secret"));
    }

    #[tokio::test]
    async fn test_validate_request_empty_messages() {
        let server = MockServer::start().await;
        let client = create_mock_client(&server).await;

        let err = client
            .send(ApiRequest::new("claude-test", 100, vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, AnthropicError::InvalidRequest { .. }));
    }

    #[tokio::test]
    async fn test_validate_request_too_many_messages() {
        let server = MockServer::start().await;
        let client = create_mock_client(&server).await;

        let messages: Vec<ApiMessage> = (0..=MAX_MESSAGES)
            .map(|i| ApiMessage::user(format!("Message {i}")))
            .collect();

        let err = client
            .send(ApiRequest::new("claude-test", 100, messages))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Too many messages"));
    }

    #[tokio::test]
    async fn test_validate_request_message_too_large() {
        let server = MockServer::start().await;
        let client = create_mock_client(&server).await;

        let messages = vec![ApiMessage::user("x".repeat(MAX_CONTENT_LENGTH + 1))];
        let err = client
            .send(ApiRequest::new("claude-test", 100, messages))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Message too large"));
    }

    #[tokio::test]
    async fn test_send_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/messages"))
            .and(header("x-api-key", "test-api-key"))
            .and(header("anthropic-version", ANTHROPIC_VERSION))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_response_body("Hello!")))
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let response = client
            .send(ApiRequest::new("claude-test", 100, vec![ApiMessage::user("Hi")]))
            .await
            .unwrap();

        assert_eq!(response.raw_text, "Hello!");
        assert_eq!(response.usage.input_tokens, 10);
        assert_eq!(response.usage.output_tokens, 20);
    }

    #[tokio::test]
    async fn test_send_joins_text_blocks() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_123",
                "content": [
                    {"type": "text", "text": "first"},
                    {"type": "text", "text": "second"}
                ],
                "model": "claude-test",
                "usage": {"input_tokens": 1, "output_tokens": 2}
            })))
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let response = client
            .send(ApiRequest::new("claude-test", 100, vec![ApiMessage::user("Hi")]))
            .await
            .unwrap();
        assert_eq!(response.raw_text, "first\nsecond");
    }

    #[tokio::test]
    async fn test_send_auth_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let err = client
            .send(ApiRequest::new("claude-test", 100, vec![ApiMessage::user("Hi")]))
            .await
            .unwrap_err();
        assert_eq!(err, AnthropicError::AuthenticationFailed);
    }

    #[tokio::test]
    async fn test_send_rate_limited_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(
                ResponseTemplate::new(429)
                    .append_header("retry-after", "30")
                    .set_body_string("Rate limited"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let err = client
            .send(ApiRequest::new("claude-test", 100, vec![ApiMessage::user("Hi")]))
            .await
            .unwrap_err();

        match err {
            AnthropicError::RateLimited {
                retry_after_seconds,
            } => assert_eq!(retry_after_seconds, 30),
            e => panic!("Wrong error type: {e:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_model_overloaded() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(529).set_body_string("Overloaded"))
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let err = client
            .send(ApiRequest::new("claude-sonnet", 100, vec![ApiMessage::user("Hi")]))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AnthropicError::ModelOverloaded {
                model: "claude-sonnet".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_send_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let err = client
            .send(ApiRequest::new("claude-test", 100, vec![ApiMessage::user("Hi")]))
            .await
            .unwrap_err();
        assert!(matches!(err, AnthropicError::UnexpectedResponse { .. }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_send_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_123",
                "content": [],
                "model": "claude-test",
                "usage": {"input_tokens": 10, "output_tokens": 0},
                "stop_reason": "end_turn"
            })))
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let err = client
            .send(ApiRequest::new("claude-test", 100, vec![ApiMessage::user("Hi")]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No content"));
    }

    #[tokio::test]
    async fn test_send_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(success_response_body("late"))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = ClientConfig::default()
            .with_base_url(server.uri())
            .with_timeout_ms(50);
        let client = AnthropicClient::new(SecretString::new("k"), config).unwrap();
        let err = client
            .send(ApiRequest::new("claude-test", 100, vec![ApiMessage::user("Hi")]))
            .await
            .unwrap_err();
        assert_eq!(err, AnthropicError::Timeout { timeout_ms: 50 });
    }

    #[tokio::test]
    async fn test_trait_complete_uses_configured_model_and_settings() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/messages"))
            .and(body_partial_json(json!({
                "model": "claude-test",
                "max_tokens": 512,
                "temperature": 0.5,
                "system": "be brief",
                "messages": [
                    {"role": "user", "content": "Hi"},
                    {"role": "assistant", "content": "Hello"},
                    {"role": "user", "content": "How are you?"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_response_body("Fine")))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let messages = vec![
            Message::user("Hi"),
            Message::assistant("Hello"),
            Message::user("How are you?"),
        ];
        let config = CompletionConfig::new()
            .with_max_tokens(512)
            .with_temperature(0.5)
            .with_system_prompt("be brief");

        let response = TextGenerationClient::complete(&client, messages, config)
            .await
            .unwrap();
        assert_eq!(response.content, "Fine");
        assert_eq!(response.usage, Usage::new(10, 20));
    }

    #[tokio::test]
    async fn test_trait_complete_maps_errors_to_enrichment_api() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = Arc::new(create_mock_client(&server).await);
        let err = TextGenerationClient::complete(
            &client,
            vec![Message::user("Hi")],
            CompletionConfig::new(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, EnrichmentError::Api { .. }));
        assert!(err.to_string().contains("Authentication failed"));
    }
}
