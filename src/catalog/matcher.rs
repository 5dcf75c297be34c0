// ABOUTME: Exact-match plan filtering over immutable catalogs
// ABOUTME: Pure functions returning the all-matches and first-match result shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

//! Plan matching
//!
//! Filtering is exact equality on every criterion attribute: case-sensitive,
//! no normalization, no partial or fuzzy matching. The match functions are
//! pure and deterministic; the catalog is borrowed immutably and the result
//! preserves its original relative order.
//!
//! No-match is an ordinary outcome here, not an error. [`all_matches`]
//! returns an empty `Vec` and [`first_match`] returns `None`; callers decide
//! how to present that (the plan routes attach a warning message).

use crate::models::{DietCriteria, DietPlan, FitnessCriteria, FitnessPlan};

/// Selection criteria that can be tested against one catalog entry type
pub trait Criteria<E> {
    /// True when every criterion attribute equals the entry attribute exactly
    fn matches(&self, entry: &E) -> bool;
}

impl Criteria<FitnessPlan> for FitnessCriteria {
    fn matches(&self, entry: &FitnessPlan) -> bool {
        entry.goal == self.goal && entry.level == self.level && entry.duration == self.duration
    }
}

impl Criteria<DietPlan> for DietCriteria {
    fn matches(&self, entry: &DietPlan) -> bool {
        entry.goal == self.goal
            && entry.diet_preference == self.diet_preference
            && entry.level == self.level
    }
}

/// All catalog entries satisfying the criteria, in catalog order
pub fn all_matches<'a, E>(catalog: &'a [E], criteria: &impl Criteria<E>) -> Vec<&'a E> {
    catalog.iter().filter(|e| criteria.matches(e)).collect()
}

/// The first catalog entry satisfying the criteria, if any
///
/// The diet consumer historically presents a single plan, so this shape is
/// exposed directly rather than making callers index into [`all_matches`].
pub fn first_match<'a, E>(catalog: &'a [E], criteria: &impl Criteria<E>) -> Option<&'a E> {
    catalog.iter().find(|e| criteria.matches(e))
}
