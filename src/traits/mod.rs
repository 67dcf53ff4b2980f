//! Trait definitions for injected collaborators.
//!
//! This module defines traits for:
//! - [`TextGenerationClient`]: the external text-generation service
//! - [`ProgressStore`]: persistence of assessments and chat logs
//!
//! # Mocking
//!
//! Both traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.

mod types;

pub use types::{CompletionConfig, CompletionResponse, Message, Usage};

pub use crate::storage::{ChatMessage, ChatRole, ProgressEntry, SortDirection};

use async_trait::async_trait;

use crate::assessment::AssessmentInput;
use crate::error::{EnrichmentError, StorageError};
use crate::scoring::PredictionResult;

/// Text-generation client trait.
///
/// Implementations make exactly one attempt per call; callers decide what a
/// failure means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerationClient: Send + Sync {
    /// Send a completion request.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichmentError::Api`] if the call fails.
    async fn complete(
        &self,
        messages: Vec<Message>,
        config: CompletionConfig,
    ) -> Result<CompletionResponse, EnrichmentError>;
}

/// Persistence collaborator.
///
/// Stores `(user, input, result)` records and retrieves them in timestamp
/// order, plus per-session chat logs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Persist one assessment and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::MissingUserId`] for an empty user ID, or a
    /// query error if the write fails.
    async fn save_progress(
        &self,
        user_id: &str,
        inputs: &AssessmentInput,
        result: &PredictionResult,
    ) -> Result<ProgressEntry, StorageError>;

    /// All records for a user, ordered by timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the read fails.
    async fn progress_history(
        &self,
        user_id: &str,
        direction: SortDirection,
    ) -> Result<Vec<ProgressEntry>, StorageError>;

    /// The most recent record for a user.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the read fails.
    async fn latest_progress(&self, user_id: &str) -> Result<Option<ProgressEntry>, StorageError>;

    /// The first-ever record for a user.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the read fails.
    async fn baseline_progress(
        &self,
        user_id: &str,
    ) -> Result<Option<ProgressEntry>, StorageError>;

    /// Append one message to a chat session.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    async fn save_chat_message(
        &self,
        user_id: &str,
        session_id: &str,
        role: ChatRole,
        content: &str,
    ) -> Result<(), StorageError>;

    /// The most recent `limit` messages of a session, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the read fails.
    async fn chat_history(
        &self,
        user_id: &str,
        session_id: &str,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, StorageError>;
}
