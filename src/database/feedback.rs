// ABOUTME: Feedback persistence database operations
// ABOUTME: Append-only parameterized inserts into the feedback table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::FeedbackCategory;

impl Database {
    /// Create the feedback table
    pub(crate) async fn migrate_feedback(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS feedback (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create feedback table: {e}")))?;

        Ok(())
    }

    /// Append one feedback row; returns the assigned row id
    ///
    /// Insertion is parameterized: the message is free text from the outside
    /// world and must never be spliced into SQL.
    ///
    /// # Errors
    /// Returns a database error if the insert fails.
    pub async fn save_feedback(
        &self,
        category: FeedbackCategory,
        message: &str,
    ) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO feedback (category, message) VALUES ($1, $2)")
            .bind(category.as_str())
            .bind(message)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to save feedback: {e}")))?;

        Ok(result.last_insert_rowid())
    }

    /// Number of feedback rows stored
    ///
    /// The service never reads feedback back; this exists for tests and
    /// operational monitoring only.
    ///
    /// # Errors
    /// Returns a database error if the query fails.
    pub async fn feedback_count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM feedback")
            .fetch_one(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to count feedback: {e}")))?;

        Ok(row.get("count"))
    }
}
