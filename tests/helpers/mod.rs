// ABOUTME: Test helper module organization for integration tests
// ABOUTME: Exposes the Axum in-process HTTP testing utilities
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nova Coach
#![allow(dead_code)]

/// In-process HTTP request helpers for Axum routers
pub mod axum_test;
