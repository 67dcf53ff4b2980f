//! Assistant chat log operations.

#![allow(clippy::missing_errors_doc)]

use chrono::Utc;
use sqlx::Row;

use crate::error::StorageError;

use super::core::SqliteStorage;
use super::types::{ChatMessage, ChatRole};

impl SqliteStorage {
    /// Append a turn to a chat session.
    ///
    /// Does nothing when the user or session ID is empty.
    pub async fn append_chat_message(
        &self,
        user_id: &str,
        session_id: &str,
        role: ChatRole,
        content: &str,
    ) -> Result<(), StorageError> {
        if user_id.is_empty() || session_id.is_empty() {
            return Ok(());
        }

        sqlx::query(
            "INSERT INTO chat_messages (user_id, session_id, role, content, timestamp) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(session_id)
        .bind(role.as_str())
        .bind(content)
        .bind(Self::format_datetime(&Utc::now()))
        .execute(&self.pool)
        .await
        .map_err(|e| Self::query_error("INSERT chat_messages", format!("{e}")))?;

        tracing::debug!(user_id, session_id, role = role.as_str(), "Logged chat message");

        Ok(())
    }

    /// The last `limit` turns of a session, oldest first.
    pub async fn get_chat_messages(
        &self,
        user_id: &str,
        session_id: &str,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, StorageError> {
        if user_id.is_empty() || session_id.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(
            "SELECT role, content, timestamp FROM chat_messages \
             WHERE user_id = ? AND session_id = ? ORDER BY seq DESC LIMIT ?",
        )
        .bind(user_id)
        .bind(session_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::query_error("SELECT chat_messages", format!("{e}")))?;

        let mut messages = rows
            .iter()
            .map(|row| {
                let role_str: String = row.get("role");
                let content: String = row.get("content");
                let timestamp_str: String = row.get("timestamp");

                let role = ChatRole::from_str(&role_str).ok_or_else(|| StorageError::Internal {
                    message: format!("Unknown chat role '{role_str}'"),
                })?;

                Ok(ChatMessage {
                    role,
                    content,
                    timestamp: Self::parse_datetime(&timestamp_str)?,
                })
            })
            .collect::<Result<Vec<_>, StorageError>>()?;

        messages.reverse();
        Ok(messages)
    }
}
