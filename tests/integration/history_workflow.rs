//! Progress history and command runner workflow tests.
//!
//! Uses file-backed databases so that history survives reopening.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use gadget_risk::anthropic::{AnthropicClient, ClientConfig};
use gadget_risk::assessment::AssessmentInput;
use gadget_risk::assistant::HealthAssistant;
use gadget_risk::cli::{Command, CommandOutput, CommandRunner};
use gadget_risk::config::SecretString;
use gadget_risk::predictor::Predictor;
use gadget_risk::scoring::{score, RiskLevel};
use gadget_risk::storage::{ChatRole, SortDirection, SqliteStorage};
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

fn with_screen_time(hours: f64) -> AssessmentInput {
    AssessmentInput {
        daily_screen_time_hours: hours,
        ..AssessmentInput::default()
    }
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[tokio::test]
#[serial]
async fn test_history_ordering_and_endpoints() {
    let (storage, _temp_dir) = create_test_storage().await;

    let mut ids = Vec::new();
    for hours in [9.0, 7.0, 5.0] {
        let input = with_screen_time(hours);
        let entry = storage
            .save_progress("alice", &input, &score(&input))
            .await
            .unwrap();
        ids.push(entry.entry_id);
    }

    let asc = storage
        .progress_history("alice", SortDirection::Asc)
        .await
        .unwrap();
    let asc_ids: Vec<_> = asc.iter().map(|e| e.entry_id.clone()).collect();
    assert_eq!(asc_ids, ids);

    let desc = storage
        .progress_history("alice", SortDirection::Desc)
        .await
        .unwrap();
    assert_eq!(desc.first().map(|e| &e.entry_id), ids.last());

    let baseline = storage.baseline_progress("alice").await.unwrap().unwrap();
    let latest = storage.latest_progress("alice").await.unwrap().unwrap();
    assert_eq!(baseline.entry_id, ids[0]);
    assert_eq!(latest.entry_id, ids[2]);
    assert_eq!(
        baseline.progress_payload.inputs.daily_screen_time_hours,
        9.0
    );
}

#[tokio::test]
#[serial]
async fn test_history_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("progress.db");

    let saved = {
        let storage = SqliteStorage::new(&db_path).await.unwrap();
        let input = with_screen_time(10.0);
        storage
            .save_progress("bob", &input, &score(&input))
            .await
            .unwrap()
    };

    let reopened = SqliteStorage::new(&db_path).await.unwrap();
    let latest = reopened.latest_progress("bob").await.unwrap().unwrap();
    assert_eq!(latest, saved);
}

#[tokio::test]
#[serial]
async fn test_users_do_not_see_each_other() {
    let (storage, _temp_dir) = create_test_storage().await;
    let input = AssessmentInput::default();
    storage
        .save_progress("alice", &input, &score(&input))
        .await
        .unwrap();

    assert!(storage
        .progress_history("carol", SortDirection::Desc)
        .await
        .unwrap()
        .is_empty());
    assert!(storage.latest_progress("carol").await.unwrap().is_none());
    assert!(storage.baseline_progress("carol").await.unwrap().is_none());
}

#[tokio::test]
#[serial]
async fn test_runner_assess_then_history_from_args() {
    let (storage, temp_dir) = create_test_storage().await;
    let storage = Arc::new(storage);
    let runner: CommandRunner<AnthropicClient, _> =
        CommandRunner::new(Arc::clone(&storage), Predictor::offline());

    let input_path = temp_dir.path().join("answers.json");
    let input = AssessmentInput {
        daily_screen_time_hours: 8.0,
        social_media_usage_hours: 4.0,
        gaming_app_usage_hours: 3.0,
        anxiety_level: 5,
        sleep_hours: 6.0,
        ..AssessmentInput::default()
    };
    std::fs::write(&input_path, serde_json::to_string(&input).unwrap()).unwrap();

    let assess = Command::parse(&args(&[
        "assess",
        "--user",
        "dana",
        "--input",
        input_path.to_str().unwrap(),
    ]))
    .unwrap();
    let CommandOutput::Assess(saved) = runner.run(assess).await.unwrap() else {
        panic!("Expected Assess output");
    };
    assert_eq!(saved.result.risk_level, RiskLevel::High);
    assert!(saved.entry_id.is_some());

    let history = Command::parse(&args(&["history", "-u", "dana"])).unwrap();
    let output = runner.run(history).await.unwrap();
    let rendered: serde_json::Value = serde_json::from_str(&output.render().unwrap()).unwrap();

    assert_eq!(rendered["count"], json!(1));
    assert_eq!(rendered["order"], json!("desc"));
    assert_eq!(
        rendered["entries"][0]["entry_id"],
        json!(saved.entry_id.unwrap())
    );
    assert_eq!(
        rendered["entries"][0]["progress_payload"]["result"]["riskLevel"],
        json!("High Addiction Risk")
    );
}

#[tokio::test]
#[serial]
async fn test_assistant_session_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_test",
            "content": [{"type": "text", "text": "Keep your phone out of the bedroom."}],
            "model": "claude-3",
            "usage": {"input_tokens": 10, "output_tokens": 8}
        })))
        .expect(2)
        .mount(&server)
        .await;

    let (storage, _temp_dir) = create_test_storage().await;
    let storage = Arc::new(storage);
    let client = Arc::new(
        AnthropicClient::new(
            SecretString::new("test-api-key"),
            ClientConfig::new().with_base_url(server.uri()),
        )
        .unwrap(),
    );
    let runner = CommandRunner::new(Arc::clone(&storage), Predictor::new(Some(Arc::clone(&client))))
        .with_assistant(HealthAssistant::new(client, Arc::clone(&storage)));

    let first = Command::parse(&args(&["ask", "-u", "erin", "I", "can't", "sleep"])).unwrap();
    let CommandOutput::Ask(first) = runner.run(first).await.unwrap() else {
        panic!("Expected Ask output");
    };
    assert!(first.greeting.is_some());

    let follow_up = Command::parse(&args(&[
        "ask",
        "-u",
        "erin",
        "-s",
        &first.session_id,
        "What",
        "else?",
    ]))
    .unwrap();
    let CommandOutput::Ask(second) = runner.run(follow_up).await.unwrap() else {
        panic!("Expected Ask output");
    };
    assert_eq!(second.reply, "Keep your phone out of the bedroom.");

    let log = storage
        .chat_history("erin", &first.session_id, 50)
        .await
        .unwrap();
    let roles: Vec<ChatRole> = log.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![ChatRole::User, ChatRole::Model, ChatRole::User, ChatRole::Model]
    );
    assert_eq!(log[0].content, "I can't sleep");
}
