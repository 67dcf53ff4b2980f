//! `ProgressStore` implementation for `SqliteStorage`.

#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use async_trait::async_trait;

use crate::assessment::AssessmentInput;
use crate::error::StorageError;
use crate::scoring::PredictionResult;
use crate::traits::ProgressStore;

use super::core::SqliteStorage;
use super::types::{ChatMessage, ChatRole, ProgressEntry, SortDirection};

#[async_trait]
impl ProgressStore for SqliteStorage {
    async fn save_progress(
        &self,
        user_id: &str,
        inputs: &AssessmentInput,
        result: &PredictionResult,
    ) -> Result<ProgressEntry, StorageError> {
        self.save_assessment(user_id, inputs, result).await
    }

    async fn progress_history(
        &self,
        user_id: &str,
        direction: SortDirection,
    ) -> Result<Vec<ProgressEntry>, StorageError> {
        self.get_progress_history(user_id, direction).await
    }

    async fn latest_progress(&self, user_id: &str) -> Result<Option<ProgressEntry>, StorageError> {
        self.get_latest_progress(user_id).await
    }

    async fn baseline_progress(
        &self,
        user_id: &str,
    ) -> Result<Option<ProgressEntry>, StorageError> {
        self.get_baseline_progress(user_id).await
    }

    async fn save_chat_message(
        &self,
        user_id: &str,
        session_id: &str,
        role: ChatRole,
        content: &str,
    ) -> Result<(), StorageError> {
        self.append_chat_message(user_id, session_id, role, content)
            .await
    }

    async fn chat_history(
        &self,
        user_id: &str,
        session_id: &str,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, StorageError> {
        self.get_chat_messages(user_id, session_id, limit).await
    }
}

#[async_trait]
impl ProgressStore for Arc<SqliteStorage> {
    async fn save_progress(
        &self,
        user_id: &str,
        inputs: &AssessmentInput,
        result: &PredictionResult,
    ) -> Result<ProgressEntry, StorageError> {
        self.as_ref().save_assessment(user_id, inputs, result).await
    }

    async fn progress_history(
        &self,
        user_id: &str,
        direction: SortDirection,
    ) -> Result<Vec<ProgressEntry>, StorageError> {
        self.as_ref().get_progress_history(user_id, direction).await
    }

    async fn latest_progress(&self, user_id: &str) -> Result<Option<ProgressEntry>, StorageError> {
        self.as_ref().get_latest_progress(user_id).await
    }

    async fn baseline_progress(
        &self,
        user_id: &str,
    ) -> Result<Option<ProgressEntry>, StorageError> {
        self.as_ref().get_baseline_progress(user_id).await
    }

    async fn save_chat_message(
        &self,
        user_id: &str,
        session_id: &str,
        role: ChatRole,
        content: &str,
    ) -> Result<(), StorageError> {
        self.as_ref()
            .append_chat_message(user_id, session_id, role, content)
            .await
    }

    async fn chat_history(
        &self,
        user_id: &str,
        session_id: &str,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, StorageError> {
        self.as_ref()
            .get_chat_messages(user_id, session_id, limit)
            .await
    }
}
