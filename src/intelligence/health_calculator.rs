// ABOUTME: Health metric calculations: BMI, Mifflin-St Jeor BMR, daily calorie need
// ABOUTME: Pure, deterministic functions with validated numeric inputs
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nova Coach

//! Health Calculator Module
//!
//! Implements the two body-metric calculations exposed by the calculator
//! endpoint. Both are pure functions; invalid measurements are rejected
//! before computation so callers never see `inf` or `NaN`.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - McArdle, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology:
//!   Nutrition, Energy, and Human Performance* (activity factor table).

use serde::{Deserialize, Serialize};

use super::physiological_constants::{activity_factors, bmr};
use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Biological sex category for BMR calculations
///
/// `Other` uses the female constant: the reference behavior has no distinct
/// third branch, and that fold is preserved here rather than silently
/// redesigned. Whether a dedicated offset should exist is an open product
/// question, not a calculation detail.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    /// Parse from the labels accepted at the HTTP boundary
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Activity level for daily calorie estimation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// Parse from the labels accepted at the HTTP boundary
    ///
    /// Accepts both snake_case and the display form ("Moderately Active").
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(' ', "_").as_str() {
            "sedentary" => Some(Self::Sedentary),
            "lightly_active" => Some(Self::LightlyActive),
            "moderately_active" => Some(Self::ModeratelyActive),
            "very_active" => Some(Self::VeryActive),
            "extra_active" => Some(Self::ExtraActive),
            _ => None,
        }
    }

    /// The TDEE multiplier for this level
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Sedentary => activity_factors::SEDENTARY,
            Self::LightlyActive => activity_factors::LIGHTLY_ACTIVE,
            Self::ModeratelyActive => activity_factors::MODERATELY_ACTIVE,
            Self::VeryActive => activity_factors::VERY_ACTIVE,
            Self::ExtraActive => activity_factors::EXTRA_ACTIVE,
        }
    }
}

/// Validate body measurements shared by both calculations
fn validate_measurements(weight_kg: f64, height_cm: f64) -> AppResult<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg > limits::MAX_WEIGHT_KG {
        return Err(AppError::value_out_of_range(format!(
            "Weight must be between 0 and {} kg",
            limits::MAX_WEIGHT_KG
        )));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 || height_cm > limits::MAX_HEIGHT_CM {
        return Err(AppError::value_out_of_range(format!(
            "Height must be between 0 and {} cm",
            limits::MAX_HEIGHT_CM
        )));
    }
    Ok(())
}

/// Calculate Body Mass Index
///
/// Formula: `weight_kg / (height_cm / 100)^2`
///
/// The raw value is returned; rounding to two decimals is a display concern
/// handled at the HTTP boundary.
///
/// # Errors
/// Returns `ValueOutOfRange` for non-positive or implausible measurements.
/// Zero height in particular is rejected here so the division can never
/// produce `inf`.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    validate_measurements(weight_kg, height_cm)?;

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: `BMR = (10 x weight_kg) + (6.25 x height_cm) - (5 x age) + sex_constant`
/// - Male: +5
/// - Female and Other: -161
///
/// # Errors
/// Returns `ValueOutOfRange` if any input is outside its valid range.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> AppResult<f64> {
    validate_measurements(weight_kg, height_cm)?;
    if age_years == 0 || age_years > limits::MAX_AGE_YEARS {
        return Err(AppError::value_out_of_range(format!(
            "Age must be between 1 and {} years",
            limits::MAX_AGE_YEARS
        )));
    }

    let sex_constant = match sex {
        Sex::Male => bmr::MALE_CONSTANT,
        Sex::Female | Sex::Other => bmr::FEMALE_CONSTANT,
    };

    Ok(bmr::WEIGHT_COEF * weight_kg
        + bmr::HEIGHT_COEF * height_cm
        + bmr::AGE_COEF * f64::from(age_years)
        + sex_constant)
}

/// Estimate total daily calorie need
///
/// Formula: `BMR x activity factor`. The raw value is returned; the HTTP
/// boundary truncates it to a whole kcal count (floor via integer cast,
/// matching the canonical reference behavior, not rounding).
///
/// # Errors
/// Returns `ValueOutOfRange` if any measurement is outside its valid range.
pub fn calculate_daily_calories(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    activity_level: ActivityLevel,
) -> AppResult<f64> {
    let bmr = calculate_bmr(weight_kg, height_cm, age_years, sex)?;
    Ok(bmr * activity_level.factor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_reference_value() {
        let bmi = calculate_bmi(70.0, 175.0).unwrap();
        // 70 / 1.75^2 = 22.857...
        assert!((bmi - 22.857_142_857).abs() < 1e-6);
    }

    #[test]
    fn test_bmi_rejects_zero_height() {
        assert!(calculate_bmi(70.0, 0.0).is_err());
        assert!(calculate_bmi(70.0, -175.0).is_err());
        assert!(calculate_bmi(0.0, 175.0).is_err());
    }

    #[test]
    fn test_bmr_male_reference_value() {
        let bmr = calculate_bmr(70.0, 175.0, 25, Sex::Male).unwrap();
        // 700 + 1093.75 - 125 + 5 = 1673.75
        assert!((bmr - 1673.75).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_other_uses_female_constant() {
        let female = calculate_bmr(60.0, 160.0, 30, Sex::Female).unwrap();
        let other = calculate_bmr(60.0, 160.0, 30, Sex::Other).unwrap();
        assert!((female - other).abs() < f64::EPSILON);
        // 600 + 1000 - 150 - 161 = 1289
        assert!((female - 1289.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_calories_reference_values() {
        let calories =
            calculate_daily_calories(70.0, 175.0, 25, Sex::Male, ActivityLevel::ModeratelyActive)
                .unwrap();
        assert!((calories - 2594.3125).abs() < 1e-9);

        let calories =
            calculate_daily_calories(60.0, 160.0, 30, Sex::Female, ActivityLevel::Sedentary)
                .unwrap();
        assert!((calories - 1546.8).abs() < 1e-9);
    }

    #[test]
    fn test_daily_calories_rejects_zero_age() {
        let result = calculate_daily_calories(70.0, 175.0, 0, Sex::Male, ActivityLevel::Sedentary);
        assert!(result.is_err());
    }

    #[test]
    fn test_activity_level_parse() {
        assert_eq!(
            ActivityLevel::parse("moderately_active"),
            Some(ActivityLevel::ModeratelyActive)
        );
        assert_eq!(
            ActivityLevel::parse("Moderately Active"),
            Some(ActivityLevel::ModeratelyActive)
        );
        assert_eq!(ActivityLevel::parse("unknown"), None);
    }

    #[test]
    fn test_activity_factors_exact() {
        assert!((ActivityLevel::Sedentary.factor() - 1.2).abs() < f64::EPSILON);
        assert!((ActivityLevel::LightlyActive.factor() - 1.375).abs() < f64::EPSILON);
        assert!((ActivityLevel::ModeratelyActive.factor() - 1.55).abs() < f64::EPSILON);
        assert!((ActivityLevel::VeryActive.factor() - 1.725).abs() < f64::EPSILON);
        assert!((ActivityLevel::ExtraActive.factor() - 1.9).abs() < f64::EPSILON);
    }
}
