// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, catalog, and resource creation helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nova Coach
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nova_coach_server`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::sync::{Arc, Once};

use nova_coach_server::{
    config::environment::ServerConfig,
    context::ServerResources,
    database::Database,
    models::{DietPlan, FitnessPlan},
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup (isolated in-memory SQLite)
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

/// A small fitness catalog with known contents
pub fn sample_fitness_catalog() -> Vec<FitnessPlan> {
    vec![
        fitness_plan("Weight Loss", "Beginner", "4 Weeks", "Jumping Jacks"),
        fitness_plan("Weight Loss", "Beginner", "4 Weeks", "Bodyweight Squats"),
        fitness_plan("Weight Loss", "Advanced", "8 Weeks", "Hill Sprints"),
        fitness_plan("Muscle Gain", "Beginner", "4 Weeks", "Push Ups"),
        fitness_plan("Muscle Gain", "Intermediate", "8 Weeks", "Bench Press"),
    ]
}

/// A small diet catalog with known contents
pub fn sample_diet_catalog() -> Vec<DietPlan> {
    vec![
        diet_plan("Weight Loss", "Vegetarian", "Beginner", "Oats porridge"),
        diet_plan("Weight Loss", "Vegetarian", "Beginner", "Vegetable poha"),
        diet_plan("Muscle Gain", "Non-Vegetarian", "Beginner", "Three-egg omelette"),
    ]
}

/// Build one fitness catalog entry
pub fn fitness_plan(goal: &str, level: &str, duration: &str, name: &str) -> FitnessPlan {
    FitnessPlan {
        goal: goal.into(),
        level: level.into(),
        duration: duration.into(),
        exercise_name: name.into(),
        exercise_explanation: format!("{name} explained"),
        time_required: "15 min".into(),
        sets: "3".into(),
    }
}

/// Build one diet catalog entry
pub fn diet_plan(goal: &str, preference: &str, level: &str, morning: &str) -> DietPlan {
    DietPlan {
        goal: goal.into(),
        diet_preference: preference.into(),
        level: level.into(),
        morning_meal: morning.into(),
        afternoon_meal: "Dal and rice".into(),
        night_meal: "Vegetable soup".into(),
    }
}

/// Server resources backed by an in-memory database and the sample catalogs
pub async fn create_test_resources() -> Arc<ServerResources> {
    create_test_resources_with(
        Some(sample_fitness_catalog()),
        Some(sample_diet_catalog()),
    )
    .await
}

/// Server resources with explicit catalog availability
pub async fn create_test_resources_with(
    fitness_catalog: Option<Vec<FitnessPlan>>,
    diet_catalog: Option<Vec<DietPlan>>,
) -> Arc<ServerResources> {
    let database = create_test_database().await;
    let config = ServerConfig::from_env().expect("Failed to load test config");

    Arc::new(ServerResources::new(
        database,
        fitness_catalog,
        diet_catalog,
        Arc::new(config),
    ))
}
