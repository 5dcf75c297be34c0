// ABOUTME: Intelligence module for health metric calculations
// ABOUTME: Groups the BMI/BMR calculator and its physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

//! # Intelligence Module
//!
//! Health metric calculations backing the calculator endpoint. Everything in
//! here is a pure function over caller-supplied values; persistence and
//! presentation live elsewhere.

/// BMI and daily calorie calculations
pub mod health_calculator;
/// Formula coefficients and activity multipliers with citations
pub mod physiological_constants;

pub use health_calculator::{
    calculate_bmi, calculate_bmr, calculate_daily_calories, ActivityLevel, Sex,
};
