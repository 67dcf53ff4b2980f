//! Storage types for database operations.
//!
//! This module defines the types stored in the database:
//! - [`ProgressEntry`]: One saved assessment
//! - [`ProgressPayload`]: The input and result of that assessment
//! - [`ChatMessage`]: One assistant chat turn
//! - [`ChatRole`]: Who sent a chat turn
//! - [`SortDirection`]: History ordering

#![allow(clippy::should_implement_trait)]

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::AssessmentInput;
use crate::scoring::PredictionResult;

/// The assessment a [`ProgressEntry`] records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPayload {
    /// What the respondent submitted.
    pub inputs: AssessmentInput,
    /// What the predictor returned.
    pub result: PredictionResult,
}

/// A saved assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Unique entry identifier.
    pub entry_id: String,
    /// Owning user.
    pub user_id: String,
    /// When the entry was saved.
    pub timestamp: DateTime<Utc>,
    /// The recorded assessment.
    pub progress_payload: ProgressPayload,
}

impl ProgressEntry {
    /// Create an entry stamped with the current time.
    ///
    /// The timestamp is truncated to the microsecond precision it is
    /// stored with, so a saved entry equals the one read back.
    #[must_use]
    pub fn new(
        entry_id: impl Into<String>,
        user_id: impl Into<String>,
        inputs: AssessmentInput,
        result: PredictionResult,
    ) -> Self {
        Self::with_timestamp(entry_id, user_id, inputs, result, Utc::now().trunc_subsecs(6))
    }

    /// Create an entry with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(
        entry_id: impl Into<String>,
        user_id: impl Into<String>,
        inputs: AssessmentInput,
        result: PredictionResult,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            entry_id: entry_id.into(),
            user_id: user_id.into(),
            timestamp,
            progress_payload: ProgressPayload { inputs, result },
        }
    }

    /// The stored prediction.
    #[must_use]
    pub const fn result(&self) -> &PredictionResult {
        &self.progress_payload.result
    }
}

/// Ordering of a progress history by timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Oldest first.
    Asc,
    /// Newest first.
    #[default]
    Desc,
}

impl SortDirection {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse from string.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub(crate) const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Sender of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The respondent.
    User,
    /// The assistant.
    Model,
    /// System notices.
    System,
}

impl ChatRole {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
            Self::System => "system",
        }
    }

    /// Parse from string.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "model" => Some(Self::Model),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

/// One chat turn in a session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender.
    pub role: ChatRole,
    /// Text of the turn.
    pub content: String,
    /// When the turn was logged.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a chat message stamped with the current time.
    #[must_use]
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
