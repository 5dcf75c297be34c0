// ABOUTME: Centralized resource container for dependency injection in route handlers
// ABOUTME: Holds the database pool, loaded catalogs, and configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nova Coach

//! # Server Resources Module
//!
//! Centralized resource container for dependency injection. Route handlers
//! share one `Arc<ServerResources>`; everything inside is either immutable
//! (catalogs, config) or internally synchronized (the sqlx pool), so request
//! handling needs no locking.

use std::sync::Arc;

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::models::{DietPlan, FitnessPlan};

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Feedback and wellness persistence
    pub database: Database,
    /// Fitness catalog; `None` when the data file was absent at startup
    pub fitness_catalog: Option<Vec<FitnessPlan>>,
    /// Diet catalog; `None` when the data file was absent at startup
    pub diet_catalog: Option<Vec<DietPlan>>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources
    #[must_use]
    pub fn new(
        database: Database,
        fitness_catalog: Option<Vec<FitnessPlan>>,
        diet_catalog: Option<Vec<DietPlan>>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            database,
            fitness_catalog,
            diet_catalog,
            config,
        }
    }
}
