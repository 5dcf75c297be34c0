// ABOUTME: Catalog module for immutable fitness and diet reference data
// ABOUTME: Provides CSV loading, exact-match filtering, and select-option listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

//! # Catalog Module
//!
//! The two reference catalogs (fitness plans, diet plans) are loaded once at
//! startup and held read-only for the process lifetime. This module groups
//! everything that operates on them:
//!
//! - [`loader`]: CSV file loading with absent-vs-malformed distinction
//! - [`matcher`]: exact-match filtering with "all matches" and "first match"
//!   result shapes

pub mod loader;
pub mod matcher;

pub use loader::{load_diet_catalog, load_fitness_catalog};
pub use matcher::{all_matches, first_match, Criteria};

use serde::{Deserialize, Serialize};

use crate::models::{DietPlan, FitnessPlan};

/// Distinct values of the fitness catalog's filterable columns
///
/// The UI collaborator offers exactly these choices, so every submitted
/// criteria value is drawn from a catalog column (the matcher still treats
/// an absent value as an ordinary empty result).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessOptions {
    pub goals: Vec<String>,
    pub levels: Vec<String>,
    pub durations: Vec<String>,
}

/// Distinct values of the diet catalog's filterable columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietOptions {
    pub goals: Vec<String>,
    pub diet_preferences: Vec<String>,
    pub levels: Vec<String>,
}

/// Collect the distinct values of one column, preserving first-appearance order
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_owned());
        }
    }
    out
}

/// Distinct select options for the fitness catalog
#[must_use]
pub fn fitness_options(catalog: &[FitnessPlan]) -> FitnessOptions {
    FitnessOptions {
        goals: distinct(catalog.iter().map(|p| p.goal.as_str())),
        levels: distinct(catalog.iter().map(|p| p.level.as_str())),
        durations: distinct(catalog.iter().map(|p| p.duration.as_str())),
    }
}

/// Distinct select options for the diet catalog
#[must_use]
pub fn diet_options(catalog: &[DietPlan]) -> DietOptions {
    DietOptions {
        goals: distinct(catalog.iter().map(|p| p.goal.as_str())),
        diet_preferences: distinct(catalog.iter().map(|p| p.diet_preference.as_str())),
        levels: distinct(catalog.iter().map(|p| p.level.as_str())),
    }
}
