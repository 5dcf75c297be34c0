// ABOUTME: Configuration module for the Nova Coach server
// ABOUTME: Environment-based configuration with typed settings structs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nova Coach

//! # Configuration Management
//!
//! Environment-only configuration: every runtime setting is read from
//! environment variables with typed defaults. There is no configuration
//! file.

/// Environment-based server configuration
pub mod environment;

pub use environment::{CatalogConfig, DatabaseUrl, Environment, LogLevel, ServerConfig};
