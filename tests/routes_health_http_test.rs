// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests health and readiness endpoints without any request state
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nova Coach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for health check routes

mod helpers;

use helpers::axum_test::AxumTestRequest;

/// Get health routes for testing
fn health_routes() -> axum::Router {
    nova_coach_server::routes::health::HealthRoutes::routes()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let routes = health_routes();

    let response = AxumTestRequest::get("/health").send(routes).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "nova-coach-server");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_timestamp_is_rfc3339() {
    let routes = health_routes();

    let response = AxumTestRequest::get("/health").send(routes).await;
    let body: serde_json::Value = response.json();

    let timestamp_str = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp_str).is_ok());
}

#[tokio::test]
async fn test_ready_endpoint_success() {
    let routes = health_routes();

    let response = AxumTestRequest::get("/ready").send(routes).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let routes = health_routes();

    let response = AxumTestRequest::get("/nope").send(routes).await;
    assert_eq!(response.status(), 404);
}
