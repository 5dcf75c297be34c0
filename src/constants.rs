// ABOUTME: System-wide constants and configuration values for the Nova Coach server
// ABOUTME: Contains environment variable names, defaults, and validation limits
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! This module provides both hardcoded constants and environment variable configuration.

/// Service identification
pub mod service_names {
    /// Canonical service name used in logs and health payloads
    pub const NOVA_COACH_SERVER: &str = "nova-coach-server";

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Environment variable names read at startup
pub mod env_config {
    /// HTTP port override
    pub const HTTP_PORT: &str = "HTTP_PORT";

    /// Database URL (SQLite path or `sqlite::memory:`)
    pub const DATABASE_URL: &str = "DATABASE_URL";

    /// Fitness catalog CSV path
    pub const FITNESS_CATALOG_PATH: &str = "FITNESS_CATALOG_PATH";

    /// Diet catalog CSV path
    pub const DIET_CATALOG_PATH: &str = "DIET_CATALOG_PATH";

    /// Log level (error, warn, info, debug, trace)
    pub const LOG_LEVEL: &str = "LOG_LEVEL";

    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default configuration values used when environment variables are unset
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;

    /// Default SQLite database path
    pub const DATABASE_URL: &str = "sqlite:./data/nova_coach.db";

    /// Default fitness catalog path (file name matches the shipped data set)
    pub const FITNESS_CATALOG_PATH: &str = "./data/fitness_plans_detailed_50_exercises.csv";

    /// Default diet catalog path
    pub const DIET_CATALOG_PATH: &str = "./data/diet_plans_foods_50.csv";

    /// Default log level
    pub const LOG_LEVEL: &str = "info";
}

/// Validation limits for calculator inputs
///
/// The UI collaborator enforces a minimum of 1.0 for weight and height; the
/// server re-validates so a malformed request can never reach the formulas.
pub mod limits {
    /// Maximum plausible body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 500.0;

    /// Maximum plausible height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;

    /// Maximum plausible age (years)
    pub const MAX_AGE_YEARS: u32 = 130;

    /// Maximum accepted feedback/journal message length (bytes)
    pub const MAX_MESSAGE_BYTES: usize = 10_000;
}
