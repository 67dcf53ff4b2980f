//! Prediction workflow tests.
//!
//! Scores real submissions and enriches them through a mocked Anthropic
//! endpoint.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::float_cmp
)]

use gadget_risk::anthropic::{AnthropicClient, ClientConfig};
use gadget_risk::assessment::AssessmentInput;
use gadget_risk::config::SecretString;
use gadget_risk::predictor::Predictor;
use gadget_risk::scoring::{evaluate, score, RiskLevel};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Utilities
// ============================================================================

/// Create Anthropic API success response body.
fn anthropic_response(text: &str) -> serde_json::Value {
    json!({
        "id": "msg_test",
        "content": [{"type": "text", "text": text}],
        "model": "claude-3",
        "usage": {"input_tokens": 100, "output_tokens": 50},
        "stop_reason": "end_turn"
    })
}

fn analysis_json() -> serde_json::Value {
    json!({
        "summary": "Heavy social and gaming use.",
        "risk_level_explanation": "All three behavioral thresholds are exceeded.",
        "anomaly_explanation": "Screen time is typical for your peers.",
        "recommendations": {
            "usage_control": ["Set app limits"],
            "sleep_hygiene": ["No screens after 10pm"],
            "productivity_focus": ["Batch notifications"],
            "mental_wellbeing": ["Try a short walk when anxious"],
            "daily_action_plan": ["Delete one game", "Walk 20 minutes", "Read before bed"]
        },
        "progress_tracking_tip": "Compare next week's social media hours.",
        "disclaimer": "Not a medical diagnosis."
    })
}

fn predictor_for(server: &MockServer) -> Predictor<AnthropicClient> {
    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_timeout_ms(5_000);
    let client = AnthropicClient::new(SecretString::new("test-api-key"), config).unwrap();
    Predictor::with_client(client)
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

fn light_user() -> AssessmentInput {
    AssessmentInput {
        daily_screen_time_hours: 2.0,
        social_media_usage_hours: 1.0,
        gaming_app_usage_hours: 0.0,
        anxiety_level: 2,
        sleep_hours: 8.0,
        ..AssessmentInput::default()
    }
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_heavy_user_scenario() {
    let result = score(&heavy_user());

    assert!(result.is_addicted);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.probability, 0.85);
    assert!(!result.anomaly_detected);
}

#[test]
fn test_light_user_scenario() {
    let result = score(&light_user());

    assert!(!result.is_addicted);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.recommendations.is_empty());
    assert_eq!(result.probability, 0.12);
}

#[test]
fn test_extreme_screen_time_scenario() {
    let input = AssessmentInput {
        daily_screen_time_hours: 20.0,
        ..AssessmentInput::default()
    };
    assert!(score(&input).anomaly_detected);
}

#[test]
fn test_scoring_is_idempotent() {
    let input = heavy_user();
    assert_eq!(score(&input), score(&input));
}

// ============================================================================
// Enrichment over HTTP
// ============================================================================

#[tokio::test]
async fn test_predict_attaches_analysis() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(header("x-api-key", "test-api-key"))
        .and(body_string_contains("High Addiction Risk"))
        .and(body_string_contains("\\\"confidence_score\\\":\\\"85.0\\\""))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(anthropic_response(&analysis_json().to_string())),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = predictor_for(&server).predict(&heavy_user()).await;

    let analysis = result.ai_analysis.as_ref().expect("analysis attached");
    assert_eq!(analysis.summary, "Heavy social and gaming use.");
    assert_eq!(analysis.recommendations.daily_action_plan.len(), 3);

    let offline = score(&heavy_user());
    assert_eq!(result.probability, offline.probability);
    assert_eq!(result.recommendations, offline.recommendations);
}

#[tokio::test]
async fn test_predict_accepts_fenced_json() {
    let server = MockServer::start().await;
    let fenced = format!(
        "Here is the analysis:\n```json\n{}\n```",
        serde_json::to_string_pretty(&analysis_json()).unwrap()
    );

    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(anthropic_response(&fenced)))
        .mount(&server)
        .await;

    let result = predictor_for(&server).predict(&light_user()).await;
    assert!(result.is_enriched());
}

#[tokio::test]
async fn test_enrich_reports_schema_violation() {
    let server = MockServer::start().await;
    let mut incomplete = analysis_json();
    incomplete.as_object_mut().unwrap().remove("disclaimer");

    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(anthropic_response(&incomplete.to_string())),
        )
        .mount(&server)
        .await;

    let input = light_user();
    let err = predictor_for(&server)
        .enrich(&input, &evaluate(&input))
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            gadget_risk::error::EnrichmentError::SchemaViolation { .. }
        ),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_offline_predict_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let predictor: Predictor<AnthropicClient> = Predictor::offline();
    let result = predictor.predict(&heavy_user()).await;
    assert!(result.ai_analysis.is_none());
}
