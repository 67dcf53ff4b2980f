//! Test utilities and mock factories.
//!
//! This module provides shared testing infrastructure:
//! - Mock factories for the collaborator traits
//! - Assessment and analysis fixtures
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;

use crate::assessment::AssessmentInput;
use crate::enrichment::AiAnalysis;
use crate::error::{EnrichmentError, StorageError};
use crate::storage::SqliteStorage;
use crate::traits::{CompletionResponse, MockProgressStore, MockTextGenerationClient, Usage};

/// Create a mock client that returns a fixed response to every call.
///
/// # Example
///
/// ```ignore
/// let mock = mock_client_success("Hello!");
/// let result = mock.complete(messages, config).await;
/// assert_eq!(result.unwrap().content, "Hello!");
/// ```
#[must_use]
pub fn mock_client_success(response: &str) -> MockTextGenerationClient {
    let response = response.to_string();
    let mut mock = MockTextGenerationClient::new();
    mock.expect_complete().returning(move |_msgs, _config| {
        Ok(CompletionResponse::new(response.clone(), Usage::new(10, 20)))
    });
    mock
}

/// Create a mock client whose every call fails with [`EnrichmentError::Api`].
#[must_use]
pub fn mock_client_error(message: &str) -> MockTextGenerationClient {
    let error = EnrichmentError::Api {
        message: message.to_string(),
    };
    let mut mock = MockTextGenerationClient::new();
    mock.expect_complete()
        .returning(move |_msgs, _config| Err(error.clone()));
    mock
}

/// Create a mock store that rejects every chat write and returns no history.
#[must_use]
pub fn mock_store_chat_unavailable() -> MockProgressStore {
    let mut mock = MockProgressStore::new();
    mock.expect_save_chat_message().returning(|_, _, _, _| {
        Err(StorageError::ConnectionFailed {
            message: "database is locked".to_string(),
        })
    });
    mock.expect_chat_history().returning(|_, _, _| {
        Err(StorageError::ConnectionFailed {
            message: "database is locked".to_string(),
        })
    });
    mock
}

/// Fresh in-memory storage with migrations applied.
pub async fn test_storage() -> SqliteStorage {
    SqliteStorage::new_in_memory()
        .await
        .expect("Failed to create test storage")
}

/// A well-formed analysis payload.
#[must_use]
pub fn sample_analysis_json() -> serde_json::Value {
    json!({
        "summary": "Your usage is elevated but manageable.",
        "risk_level_explanation": "Social media and gaming both exceed typical levels.",
        "anomaly_explanation": "Screen time is within the usual range.",
        "recommendations": {
            "usage_control": ["Cap social apps at 90 minutes"],
            "sleep_hygiene": ["Charge your phone outside the bedroom"],
            "productivity_focus": ["Use 25-minute focus blocks"],
            "mental_wellbeing": ["Plan one offline activity per day"],
            "daily_action_plan": ["Turn off notifications", "Take a walk", "Read before bed"]
        },
        "progress_tracking_tip": "Retake the assessment in a week.",
        "disclaimer": "This is not medical advice."
    })
}

/// The parsed form of [`sample_analysis_json`].
#[must_use]
pub fn sample_analysis() -> AiAnalysis {
    serde_json::from_value(sample_analysis_json()).unwrap()
}

/// Input that trips the behavioral rule (0.85, High, not an anomaly).
#[must_use]
pub fn high_risk_input() -> AssessmentInput {
    AssessmentInput {
        daily_screen_time_hours: 8.0,
        social_media_usage_hours: 4.0,
        gaming_app_usage_hours: 3.0,
        anxiety_level: 5,
        sleep_hours: 6.0,
        ..AssessmentInput::default()
    }
}

/// Input that scores Low with no legacy advice.
#[must_use]
pub fn low_risk_input() -> AssessmentInput {
    AssessmentInput {
        daily_screen_time_hours: 2.0,
        social_media_usage_hours: 1.0,
        gaming_app_usage_hours: 0.0,
        anxiety_level: 2,
        sleep_hours: 8.0,
        ..AssessmentInput::default()
    }
}
