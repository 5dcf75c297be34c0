// ABOUTME: Wellness journal persistence database operations
// ABOUTME: Append-only mood and journal entries, same policy as feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::Mood;

impl Database {
    /// Create the wellness entries table
    pub(crate) async fn migrate_wellness(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS wellness_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                mood TEXT NOT NULL,
                journal TEXT NOT NULL DEFAULT '',
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create wellness table: {e}")))?;

        Ok(())
    }

    /// Append one wellness journal entry; returns the assigned row id
    ///
    /// A mood tap with no journal text is a valid entry, so `journal` may be
    /// empty.
    ///
    /// # Errors
    /// Returns a database error if the insert fails.
    pub async fn save_wellness_entry(&self, mood: Mood, journal: &str) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO wellness_entries (mood, journal) VALUES ($1, $2)")
            .bind(mood.as_str())
            .bind(journal)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to save wellness entry: {e}")))?;

        Ok(result.last_insert_rowid())
    }

    /// Number of wellness entries stored (tests and monitoring only)
    ///
    /// # Errors
    /// Returns a database error if the query fails.
    pub async fn wellness_entry_count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM wellness_entries")
            .fetch_one(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to count wellness entries: {e}")))?;

        Ok(row.get("count"))
    }
}
