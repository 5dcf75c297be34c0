// ABOUTME: Route module organization for Nova Coach HTTP endpoints
// ABOUTME: Provides centralized route definitions organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

//! Route module for the Nova Coach server
//!
//! This module organizes all HTTP routes by domain, one module per dashboard
//! concern. Each module contains only route definitions and thin handler
//! functions that delegate to the catalog, intelligence, and database layers.

/// Health metric calculator routes
pub mod calculator;
/// Feedback submission routes
pub mod feedback;
/// Health check and system status routes
pub mod health;
/// Fitness and diet plan lookup routes
pub mod plans;
/// Wellness journal routes
pub mod wellness;

pub use calculator::CalculatorRoutes;
pub use feedback::FeedbackRoutes;
pub use health::HealthRoutes;
pub use plans::PlanRoutes;
pub use wellness::WellnessRoutes;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::context::ServerResources;

/// Assemble the complete application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(PlanRoutes::routes(resources.clone()))
        .merge(CalculatorRoutes::routes())
        .merge(FeedbackRoutes::routes(resources.clone()))
        .merge(WellnessRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
}
