// ABOUTME: Feedback submission route handler
// ABOUTME: Validates the category label and message size, then appends one row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

//! Feedback submission route

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
use crate::models::FeedbackCategory;

/// Feedback request payload
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub category: String,
    pub message: String,
}

/// Feedback routes
pub struct FeedbackRoutes;

impl FeedbackRoutes {
    /// Create all feedback routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/feedback", post(Self::handle_submit))
            .with_state(resources)
    }

    async fn handle_submit(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<FeedbackRequest>,
    ) -> Result<Response, AppError> {
        let category = FeedbackCategory::parse(&request.category).ok_or_else(|| {
            AppError::invalid_input(format!("Unknown feedback category: {}", request.category))
        })?;

        if request.message.len() > limits::MAX_MESSAGE_BYTES {
            return Err(AppError::invalid_input(format!(
                "Feedback message exceeds {} bytes",
                limits::MAX_MESSAGE_BYTES
            )));
        }

        let id = resources
            .database
            .save_feedback(category, &request.message)
            .await?;
        info!(category = %category, id, "Feedback submitted");

        Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({"success": true, "id": id})),
        )
            .into_response())
    }
}
