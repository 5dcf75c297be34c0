// ABOUTME: Main library entry point for the Nova Coach wellness platform
// ABOUTME: Provides plan lookup, health metric calculation, and journal/feedback persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Nova Coach Server
//!
//! A wellness coaching API serving fitness plans, diet plans, health metric
//! calculations, and journal/feedback logging over JSON/HTTP.
//!
//! ## Features
//!
//! - **Plan lookup**: exact-match filtering of the fitness and diet catalogs
//! - **Health calculator**: BMI and Mifflin-St Jeor daily calorie estimates
//! - **Wellness journal**: append-only mood and journal logging
//! - **Feedback**: append-only feedback submission
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Catalog**: immutable reference data, loaded once at startup
//! - **Intelligence**: pure health metric calculations
//! - **Database**: SQLite-backed append-only persistence
//! - **Routes**: thin axum handlers over the above
//! - **Config**: environment-variable configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nova_coach_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("Nova Coach server configured with port: HTTP={}",
//!              config.http_port);
//!
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the binary crate (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access
// them.

/// Immutable plan catalogs: loading and exact-match filtering
pub mod catalog;

/// Configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Focused dependency injection context for route handlers
pub mod context;

/// Feedback and wellness journal persistence
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Health metric calculations (BMI, BMR, daily calories)
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// Common data models for catalogs, criteria, and journal labels
pub mod models;

/// `HTTP` routes for the wellness dashboard operations
pub mod routes;
