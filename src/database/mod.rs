// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Management
//!
//! This module provides the SQLite-backed persistence for the Nova Coach
//! server: the append-only feedback table and the append-only wellness
//! journal. Both tables are bootstrapped with `CREATE TABLE IF NOT EXISTS`
//! on connect; there is no further schema management.

mod feedback;
mod wellness;

use sqlx::{Pool, Sqlite, SqlitePool};

use crate::errors::{AppError, AppResult};

/// Database manager for feedback and wellness storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and bootstrap tables
    ///
    /// # Errors
    /// Returns a database error when the connection or table bootstrap fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Bootstrap all tables
    ///
    /// # Errors
    /// Returns a database error when table creation fails.
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_feedback().await?;
        self.migrate_wellness().await?;
        Ok(())
    }
}
