// ABOUTME: Wellness journal route handler for mood and daily journal entries
// ABOUTME: Validates the mood label and appends one journal row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

//! Wellness journal route
//!
//! A mood tap alone is a valid entry; the journal text is optional.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use crate::constants::limits;
use crate::context::ServerResources;
use crate::errors::AppError;
use crate::models::Mood;

/// Wellness journal request payload
#[derive(Debug, Deserialize)]
pub struct JournalRequest {
    pub mood: String,
    #[serde(default)]
    pub journal: Option<String>,
}

/// Wellness routes
pub struct WellnessRoutes;

impl WellnessRoutes {
    /// Create all wellness routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/wellness/journal", post(Self::handle_log_entry))
            .with_state(resources)
    }

    async fn handle_log_entry(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<JournalRequest>,
    ) -> Result<Response, AppError> {
        let mood = Mood::parse(&request.mood)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown mood: {}", request.mood)))?;

        let journal = request.journal.unwrap_or_default();
        if journal.len() > limits::MAX_MESSAGE_BYTES {
            return Err(AppError::invalid_input(format!(
                "Journal entry exceeds {} bytes",
                limits::MAX_MESSAGE_BYTES
            )));
        }

        let id = resources
            .database
            .save_wellness_entry(mood, &journal)
            .await?;
        info!(mood = %mood, id, "Wellness entry saved");

        Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({"success": true, "id": id})),
        )
            .into_response())
    }
}
