//! Output types for CLI commands.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::scoring::PredictionResult;
use crate::storage::{ProgressEntry, SortDirection};

/// Output of `assess`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessOutput {
    /// Saved entry ID, absent with `--no-save`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<String>,
    /// Save time, absent with `--no-save`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// The prediction.
    pub result: PredictionResult,
}

impl AssessOutput {
    /// Output for a result that was not saved.
    #[must_use]
    pub const fn unsaved(result: PredictionResult) -> Self {
        Self {
            entry_id: None,
            timestamp: None,
            result,
        }
    }

    /// Output for a saved entry.
    #[must_use]
    pub fn saved(entry: ProgressEntry) -> Self {
        Self {
            entry_id: Some(entry.entry_id),
            timestamp: Some(entry.timestamp),
            result: entry.progress_payload.result,
        }
    }
}

/// Output of `history`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryOutput {
    /// Owning user.
    pub user_id: String,
    /// Ordering applied.
    pub order: SortDirection,
    /// Number of entries.
    pub count: usize,
    /// The entries.
    pub entries: Vec<ProgressEntry>,
}

/// Output of `latest` and `baseline`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryOutput {
    /// Owning user.
    pub user_id: String,
    /// The entry, `null` when the user has none.
    pub entry: Option<ProgressEntry>,
}

/// Output of `ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskOutput {
    /// Session to pass back with `--session`.
    pub session_id: String,
    /// Opening line, present only for a new session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    /// The assistant's answer.
    pub reply: String,
}

/// Result of running any command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    /// `assess`
    Assess(AssessOutput),
    /// `history`
    History(HistoryOutput),
    /// `latest` / `baseline`
    Entry(EntryOutput),
    /// `ask`
    Ask(AskOutput),
    /// `help`
    Help(&'static str),
}

impl CommandOutput {
    /// Render for stdout: help as plain text, everything else as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialization fails.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Help(text) => Ok((*text).to_string()),
            other => serde_json::to_string_pretty(other),
        }
    }
}
