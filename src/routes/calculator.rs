// ABOUTME: Health calculator route handler for BMI and daily calorie estimates
// ABOUTME: Applies display rounding/truncation at the HTTP boundary only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

//! Health calculator route
//!
//! BMI is always computed; the daily calorie estimate additionally needs
//! age, sex, and activity level, so it is returned only when all three are
//! supplied. Presentation happens here and nowhere else: BMI is rounded to
//! two decimals, calories are truncated to a whole kcal count (the reference
//! behavior truncates on integer cast rather than rounding).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::intelligence::health_calculator::{
    calculate_bmi, calculate_daily_calories, ActivityLevel, Sex,
};

/// Calculator request payload
///
/// `sex` and `activity_level` arrive as labels and are parsed explicitly so
/// an unknown label produces a 400 with the unified error envelope.
#[derive(Debug, Deserialize)]
pub struct CalculatorRequest {
    pub weight_kg: f64,
    pub height_cm: f64,
    #[serde(default)]
    pub age_years: Option<u32>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
}

/// Calculator response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculatorResponse {
    /// BMI rounded to two decimals
    pub bmi: f64,
    /// Truncated whole-kcal estimate; absent when age/sex/activity were not supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_calories: Option<i64>,
}

/// Round to two decimals for display
fn round_bmi(bmi: f64) -> f64 {
    (bmi * 100.0).round() / 100.0
}

/// Calculator routes
pub struct CalculatorRoutes;

impl CalculatorRoutes {
    /// Create all calculator routes
    #[must_use]
    pub fn routes() -> Router {
        Router::new().route("/calculator/health", post(Self::handle_calculate))
    }

    async fn handle_calculate(
        Json(request): Json<CalculatorRequest>,
    ) -> Result<Response, AppError> {
        let bmi = round_bmi(calculate_bmi(request.weight_kg, request.height_cm)?);

        let daily_calories = match (
            request.age_years,
            request.sex.as_deref(),
            request.activity_level.as_deref(),
        ) {
            (Some(age), Some(sex_label), Some(activity_label)) => {
                let sex = Sex::parse(sex_label).ok_or_else(|| {
                    AppError::invalid_input(format!("Unknown sex category: {sex_label}"))
                })?;
                let activity_level = ActivityLevel::parse(activity_label).ok_or_else(|| {
                    AppError::invalid_input(format!("Unknown activity level: {activity_label}"))
                })?;

                let calories = calculate_daily_calories(
                    request.weight_kg,
                    request.height_cm,
                    age,
                    sex,
                    activity_level,
                )?;
                // Truncation, not rounding: 2594.31 presents as 2594
                Some(calories as i64)
            }
            (None, None, None) => None,
            _ => {
                return Err(AppError::invalid_input(
                    "age_years, sex, and activity_level must all be provided for a calorie estimate",
                ))
            }
        };

        Ok((
            StatusCode::OK,
            Json(CalculatorResponse {
                bmi,
                daily_calories,
            }),
        )
            .into_response())
    }
}
