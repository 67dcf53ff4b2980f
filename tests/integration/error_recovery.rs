//! Error recovery and edge case tests.
//!
//! Tests how the system handles error conditions and recovers gracefully.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use gadget_risk::anthropic::{AnthropicClient, ClientConfig};
use gadget_risk::assessment::AssessmentInput;
use gadget_risk::assistant::HealthAssistant;
use gadget_risk::cli::{parse_assessment, Command, CommandRunner};
use gadget_risk::config::SecretString;
use gadget_risk::error::{AppError, EnrichmentError, StorageError, ValidationError};
use gadget_risk::predictor::Predictor;
use gadget_risk::scoring::{evaluate, score};
use gadget_risk::storage::{ChatRole, SqliteStorage};
use gadget_risk::traits::ProgressStore;
use pretty_assertions::assert_eq;
use serde_json::json;
use serial_test::serial;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a test database in a temporary directory.
async fn create_test_storage() -> (SqliteStorage, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let storage = SqliteStorage::new(&db_path)
        .await
        .expect("Failed to create storage");
    (storage, temp_dir)
}

fn client_for(server: &MockServer) -> AnthropicClient {
    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_timeout_ms(2_000);
    AnthropicClient::new(SecretString::new("test-api-key"), config).unwrap()
}

async fn failing_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(status).set_body_string("{\"error\":\"nope\"}"))
        .mount(&server)
        .await;
    server
}

fn heavy_user() -> AssessmentInput {
    AssessmentInput {
        daily_screen_time_hours: 8.0,
        social_media_usage_hours: 4.0,
        gaming_app_usage_hours: 3.0,
        anxiety_level: 5,
        sleep_hours: 6.0,
        ..AssessmentInput::default()
    }
}

#[tokio::test]
async fn test_enrichment_failure_keeps_deterministic_fields() {
    for status in [401_u16, 429, 500, 529] {
        let server = failing_server(status).await;
        let predictor = Predictor::with_client(client_for(&server));

        let result = predictor.predict(&heavy_user()).await;
        assert_eq!(result, score(&heavy_user()), "status {status}");
        assert!(result.ai_analysis.is_none());
    }
}

#[tokio::test]
async fn test_unparseable_reply_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_test",
            "content": [{"type": "text", "text": "I'd rather not answer in JSON."}],
            "model": "claude-3",
            "usage": {"input_tokens": 10, "output_tokens": 8}
        })))
        .mount(&server)
        .await;

    let predictor = Predictor::with_client(client_for(&server));
    let input = heavy_user();

    let err = predictor.enrich(&input, &evaluate(&input)).await.unwrap_err();
    assert!(matches!(err, EnrichmentError::JsonParseFailed { .. }));

    let result = predictor.predict(&input).await;
    assert_eq!(result, score(&input));
}

#[tokio::test]
async fn test_enrich_without_client() {
    let predictor: Predictor<AnthropicClient> = Predictor::offline();
    let input = heavy_user();
    let err = predictor.enrich(&input, &evaluate(&input)).await.unwrap_err();
    assert_eq!(err, EnrichmentError::CredentialMissing);
}

#[tokio::test]
#[serial]
async fn test_assistant_failure_surfaces_and_keeps_question() {
    let server = failing_server(500).await;
    let (storage, _temp_dir) = create_test_storage().await;
    let storage = Arc::new(storage);

    let runner = CommandRunner::new(Arc::clone(&storage), Predictor::offline())
        .with_assistant(HealthAssistant::new(client_for(&server), Arc::clone(&storage)));

    let command = Command::Ask {
        user_id: "frank".into(),
        session_id: Some("session-1".into()),
        question: "Is four hours of gaming too much?".into(),
    };
    let err = runner.run(command).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Enrichment(EnrichmentError::Api { .. })
    ));

    let log = storage.chat_history("frank", "session-1", 50).await.unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].role, ChatRole::User);
}

#[tokio::test]
#[serial]
async fn test_save_without_user_leaves_history_untouched() {
    let (storage, _temp_dir) = create_test_storage().await;
    let input = heavy_user();
    storage
        .save_progress("grace", &input, &score(&input))
        .await
        .unwrap();

    let err = storage
        .save_progress("", &input, &score(&input))
        .await
        .unwrap_err();
    assert_eq!(err, StorageError::MissingUserId);

    let history = storage
        .progress_history("grace", Default::default())
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
}

#[test]
fn test_invalid_submissions_are_rejected_before_scoring() {
    let input = AssessmentInput {
        social_media_usage_hours: 12.0,
        productivity_app_usage_hours: 8.0,
        gaming_app_usage_hours: 6.0,
        ..AssessmentInput::default()
    };

    let err = parse_assessment(&serde_json::to_string(&input).unwrap()).unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::HoursExceedDay { .. })
    ));
}

#[test]
fn test_missing_field_is_input_error() {
    let err = parse_assessment(r#"{"age": 30}"#).unwrap_err();
    match err {
        AppError::Input { message } => assert!(message.contains("missing field")),
        other => panic!("Expected input error, got {other:?}"),
    }
}
