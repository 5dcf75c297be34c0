// ABOUTME: Core data models and types for the Nova Coach wellness API
// ABOUTME: Defines catalog plan entries, selection criteria, and journal/feedback labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

//! # Data Models
//!
//! This module contains the core data structures used throughout the Nova
//! Coach server: the two catalog entry types, their selection criteria, and
//! the enumerated labels accepted by the feedback and wellness endpoints.
//!
//! ## Design Principles
//!
//! - **Immutable reference data**: catalog entries are never mutated after load
//! - **Exact-match semantics**: criteria values are compared case-sensitively,
//!   with no normalization, mirroring the reference filtering behavior
//! - **Serializable**: all models support JSON serialization for the HTTP API

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A single exercise entry in the fitness plan catalog
///
/// The first three fields are the filterable attributes; the rest describe
/// the exercise itself. `sets` stays textual because the source data mixes
/// plain counts with annotations like "3 x 12".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessPlan {
    /// Training goal category (e.g., "Weight Loss", "Muscle Gain")
    pub goal: String,
    /// Fitness level category (e.g., "Beginner", "Intermediate")
    pub level: String,
    /// Plan duration category (e.g., "4 Weeks")
    pub duration: String,
    /// Exercise name
    pub exercise_name: String,
    /// Free-text explanation of the exercise
    pub exercise_explanation: String,
    /// Time required label (e.g., "20 min")
    pub time_required: String,
    /// Sets label
    pub sets: String,
}

/// A single meal-plan entry in the diet catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    /// Dietary goal category
    pub goal: String,
    /// Diet preference category (e.g., "Vegetarian", "Non-Vegetarian")
    pub diet_preference: String,
    /// Level category
    pub level: String,
    /// Morning meal description
    pub morning_meal: String,
    /// Afternoon meal description
    pub afternoon_meal: String,
    /// Night meal description
    pub night_meal: String,
}

/// Selection criteria for the fitness catalog
///
/// One value per filterable column. Constructed fresh per request; a value
/// absent from the catalog simply produces an empty match list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessCriteria {
    pub goal: String,
    pub level: String,
    pub duration: String,
}

/// Selection criteria for the diet catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietCriteria {
    pub goal: String,
    pub diet_preference: String,
    pub level: String,
}

/// Feedback categories accepted by the feedback endpoint
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FeedbackCategory {
    /// General comment about the service
    #[serde(rename = "General Comment")]
    GeneralComment,
    /// Request for new functionality
    #[serde(rename = "Feature Request")]
    FeatureRequest,
    /// Report of broken behavior
    #[serde(rename = "Bug Report")]
    BugReport,
    /// Positive feedback
    #[serde(rename = "Praise")]
    Praise,
}

impl FeedbackCategory {
    /// Canonical label stored in the database
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GeneralComment => "General Comment",
            Self::FeatureRequest => "Feature Request",
            Self::BugReport => "Bug Report",
            Self::Praise => "Praise",
        }
    }

    /// Parse a category from its canonical label
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "General Comment" => Some(Self::GeneralComment),
            "Feature Request" => Some(Self::FeatureRequest),
            "Bug Report" => Some(Self::BugReport),
            "Praise" => Some(Self::Praise),
            _ => None,
        }
    }
}

impl Display for FeedbackCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Mood labels accepted by the wellness journal endpoint
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mood {
    #[serde(rename = "Happy")]
    Happy,
    #[serde(rename = "Calm")]
    Calm,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Stressed")]
    Stressed,
}

impl Mood {
    /// Canonical label stored in the database
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Calm => "Calm",
            Self::Neutral => "Neutral",
            Self::Stressed => "Stressed",
        }
    }

    /// Parse a mood from its canonical label
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Happy" => Some(Self::Happy),
            "Calm" => Some(Self::Calm),
            "Neutral" => Some(Self::Neutral),
            "Stressed" => Some(Self::Stressed),
            _ => None,
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
