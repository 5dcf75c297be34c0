// ABOUTME: Plan lookup route handlers for the fitness and diet catalogs
// ABOUTME: Exposes select-option listings and exact-match plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

//! Plan lookup routes
//!
//! One options endpoint and one lookup endpoint per catalog. A catalog whose
//! data file was absent at startup reports `available: false` on its options
//! endpoint and answers lookups with a `DATA_UNAVAILABLE` error body; a
//! lookup that matches nothing is a normal 200 with an empty result and a
//! warning message.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{all_matches, diet_options, first_match, fitness_options};
use crate::catalog::{DietOptions, FitnessOptions};
use crate::context::ServerResources;
use crate::errors::AppError;
use crate::models::{DietCriteria, DietPlan, FitnessCriteria, FitnessPlan};

/// Warning shown when no fitness plan matches, mirroring the dashboard copy
const NO_FITNESS_PLAN_MESSAGE: &str = "No fitness plan found.";
/// Warning shown when no diet plan matches
const NO_DIET_PLAN_MESSAGE: &str = "No diet plan found.";

/// Options response for the fitness catalog
#[derive(Debug, Serialize, Deserialize)]
pub struct FitnessOptionsResponse {
    /// False when the catalog data file was absent at startup
    pub available: bool,
    #[serde(flatten)]
    pub options: FitnessOptions,
}

/// Options response for the diet catalog
#[derive(Debug, Serialize, Deserialize)]
pub struct DietOptionsResponse {
    pub available: bool,
    #[serde(flatten)]
    pub options: DietOptions,
}

/// Fitness plan lookup response: every matching entry, in catalog order
#[derive(Debug, Serialize, Deserialize)]
pub struct FitnessPlanResponse {
    pub plans: Vec<FitnessPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Diet plan lookup response: the first matching entry or null
#[derive(Debug, Serialize, Deserialize)]
pub struct DietPlanResponse {
    pub plan: Option<DietPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Plan lookup routes
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all plan lookup routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/plans/fitness/options", get(Self::handle_fitness_options))
            .route("/plans/fitness", post(Self::handle_fitness_lookup))
            .route("/plans/diet/options", get(Self::handle_diet_options))
            .route("/plans/diet", post(Self::handle_diet_lookup))
            .with_state(resources)
    }

    async fn handle_fitness_options(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<FitnessOptionsResponse> {
        let response = resources.fitness_catalog.as_ref().map_or_else(
            || FitnessOptionsResponse {
                available: false,
                options: fitness_options(&[]),
            },
            |catalog| FitnessOptionsResponse {
                available: true,
                options: fitness_options(catalog),
            },
        );
        Json(response)
    }

    async fn handle_fitness_lookup(
        State(resources): State<Arc<ServerResources>>,
        Json(criteria): Json<FitnessCriteria>,
    ) -> Result<Response, AppError> {
        let catalog = resources
            .fitness_catalog
            .as_deref()
            .ok_or_else(|| AppError::data_unavailable("Fitness catalog"))?;

        let plans: Vec<FitnessPlan> = all_matches(catalog, &criteria)
            .into_iter()
            .cloned()
            .collect();
        let message = plans
            .is_empty()
            .then(|| NO_FITNESS_PLAN_MESSAGE.to_owned());

        Ok((StatusCode::OK, Json(FitnessPlanResponse { plans, message })).into_response())
    }

    async fn handle_diet_options(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<DietOptionsResponse> {
        let response = resources.diet_catalog.as_ref().map_or_else(
            || DietOptionsResponse {
                available: false,
                options: diet_options(&[]),
            },
            |catalog| DietOptionsResponse {
                available: true,
                options: diet_options(catalog),
            },
        );
        Json(response)
    }

    async fn handle_diet_lookup(
        State(resources): State<Arc<ServerResources>>,
        Json(criteria): Json<DietCriteria>,
    ) -> Result<Response, AppError> {
        let catalog = resources
            .diet_catalog
            .as_deref()
            .ok_or_else(|| AppError::data_unavailable("Diet catalog"))?;

        let plan = first_match(catalog, &criteria).cloned();
        let message = plan.is_none().then(|| NO_DIET_PLAN_MESSAGE.to_owned());

        Ok((StatusCode::OK, Json(DietPlanResponse { plan, message })).into_response())
    }
}
