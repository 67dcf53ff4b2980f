//! Assessment history operations.

#![allow(clippy::missing_errors_doc)]

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::assessment::AssessmentInput;
use crate::error::StorageError;
use crate::scoring::PredictionResult;

use super::core::SqliteStorage;
use super::types::{ProgressEntry, SortDirection};

const SELECT_COLUMNS: &str = "SELECT id, user_id, timestamp, inputs, result FROM progress_entries";

impl SqliteStorage {
    /// Save an assessment under a fresh ID and the current time.
    pub async fn save_assessment(
        &self,
        user_id: &str,
        inputs: &AssessmentInput,
        result: &PredictionResult,
    ) -> Result<ProgressEntry, StorageError> {
        let entry = ProgressEntry::new(
            Self::generate_id(),
            user_id,
            inputs.clone(),
            result.clone(),
        );
        self.save_progress_entry(&entry).await?;
        Ok(entry)
    }

    /// Save a fully formed entry, keeping its ID and timestamp.
    pub async fn save_progress_entry(&self, entry: &ProgressEntry) -> Result<(), StorageError> {
        if entry.user_id.trim().is_empty() {
            return Err(StorageError::MissingUserId);
        }

        let inputs = encode_payload(&entry.progress_payload.inputs, "inputs")?;
        let result = encode_payload(&entry.progress_payload.result, "result")?;

        sqlx::query(
            "INSERT INTO progress_entries (id, user_id, timestamp, inputs, result) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&entry.entry_id)
        .bind(&entry.user_id)
        .bind(Self::format_datetime(&entry.timestamp))
        .bind(&inputs)
        .bind(&result)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::query_error("INSERT progress_entries", format!("{e}")))?;

        tracing::debug!(
            entry_id = %entry.entry_id,
            user_id = %entry.user_id,
            risk_level = %entry.result().risk_level,
            "Saved progress entry"
        );

        Ok(())
    }

    /// All entries for a user ordered by timestamp, ties by insertion order.
    pub async fn get_progress_history(
        &self,
        user_id: &str,
        direction: SortDirection,
    ) -> Result<Vec<ProgressEntry>, StorageError> {
        if user_id.trim().is_empty() {
            return Ok(Vec::new());
        }

        let order = direction.as_sql();
        let sql = format!(
            "{SELECT_COLUMNS} WHERE user_id = ? ORDER BY timestamp {order}, seq {order}"
        );

        let rows = sqlx::query(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT progress_entries", format!("{e}")))?;

        rows.iter().map(Self::row_to_entry).collect()
    }

    /// The newest entry for a user.
    pub async fn get_latest_progress(
        &self,
        user_id: &str,
    ) -> Result<Option<ProgressEntry>, StorageError> {
        self.first_progress(user_id, SortDirection::Desc).await
    }

    /// The oldest entry for a user.
    pub async fn get_baseline_progress(
        &self,
        user_id: &str,
    ) -> Result<Option<ProgressEntry>, StorageError> {
        self.first_progress(user_id, SortDirection::Asc).await
    }

    async fn first_progress(
        &self,
        user_id: &str,
        direction: SortDirection,
    ) -> Result<Option<ProgressEntry>, StorageError> {
        if user_id.trim().is_empty() {
            return Ok(None);
        }

        let order = direction.as_sql();
        let sql = format!(
            "{SELECT_COLUMNS} WHERE user_id = ? ORDER BY timestamp {order}, seq {order} LIMIT 1"
        );

        let row = sqlx::query(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT progress_entries", format!("{e}")))?;

        row.as_ref().map(Self::row_to_entry).transpose()
    }

    fn row_to_entry(row: &SqliteRow) -> Result<ProgressEntry, StorageError> {
        let id: String = row.get("id");
        let user_id: String = row.get("user_id");
        let timestamp_str: String = row.get("timestamp");
        let inputs_str: String = row.get("inputs");
        let result_str: String = row.get("result");

        let timestamp = Self::parse_datetime(&timestamp_str)?;
        let inputs: AssessmentInput =
            serde_json::from_str(&inputs_str).map_err(|e| StorageError::Serialization {
                message: format!("Failed to decode inputs of entry {id}: {e}"),
            })?;
        let result: PredictionResult =
            serde_json::from_str(&result_str).map_err(|e| StorageError::Serialization {
                message: format!("Failed to decode result of entry {id}: {e}"),
            })?;

        Ok(ProgressEntry::with_timestamp(
            id, user_id, inputs, result, timestamp,
        ))
    }
}

/// Encode a payload column, refusing anything that would not decode again.
///
/// JSON has no NaN or infinity; `serde_json` writes them as `null`, which
/// the read path then rejects for every row of the user.
fn encode_payload<T>(value: &T, column: &str) -> Result<String, StorageError>
where
    T: Serialize + DeserializeOwned,
{
    let encoded = serde_json::to_string(value).map_err(|e| StorageError::Serialization {
        message: format!("Failed to encode {column}: {e}"),
    })?;
    serde_json::from_str::<T>(&encoded).map_err(|e| StorageError::Serialization {
        message: format!("Refusing to store {column} that cannot be read back: {e}"),
    })?;
    Ok(encoded)
}
