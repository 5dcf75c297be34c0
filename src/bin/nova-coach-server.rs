// ABOUTME: Server binary serving the Nova Coach wellness API
// ABOUTME: Loads configuration and catalogs, bootstraps storage, runs the HTTP server
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Nova Coach Server Binary
//!
//! This binary starts the wellness coaching API: catalog loading, SQLite
//! bootstrap, and the JSON/HTTP route surface.

use anyhow::Result;
use clap::Parser;
use nova_coach_server::{
    catalog::{load_diet_catalog, load_fitness_catalog},
    config::environment::ServerConfig,
    context::ServerResources,
    database::Database,
    logging, routes,
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "nova-coach-server")]
#[command(about = "Nova Coach - wellness coaching API for fitness plans, diet plans, and health metrics")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Nova Coach server");
    info!("{}", config.summary());

    // Initialize database and bootstrap tables
    let database = Database::new(&config.database_url.to_connection_string()).await?;
    info!("Database initialized: {}", config.database_url);

    // Load catalogs once; a missing file is a degraded state, not a crash
    let fitness_catalog = load_fitness_catalog(&config.catalogs.fitness_path)?;
    if fitness_catalog.is_none() {
        warn!(
            "Fitness catalog file not found at {}; fitness plan lookups will be unavailable",
            config.catalogs.fitness_path.display()
        );
    }
    let diet_catalog = load_diet_catalog(&config.catalogs.diet_path)?;
    if diet_catalog.is_none() {
        warn!(
            "Diet catalog file not found at {}; diet plan lookups will be unavailable",
            config.catalogs.diet_path.display()
        );
    }

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(
        database,
        fitness_catalog,
        diet_catalog,
        Arc::new(config),
    ));

    display_available_endpoints(http_port);

    let app = routes::router(resources);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", http_port)).await?;
    info!("Server listening on port {http_port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when the process receives a termination request
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {e}");
        return;
    }
    info!("Shutdown signal received");
}

/// Display all available API endpoints
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    info!("=== Available API Endpoints ===");
    info!("Monitoring:");
    info!("   Health Check:       GET  http://{host}:{port}/health");
    info!("   Readiness:          GET  http://{host}:{port}/ready");
    info!("Plans:");
    info!("   Fitness Options:    GET  http://{host}:{port}/plans/fitness/options");
    info!("   Fitness Lookup:     POST http://{host}:{port}/plans/fitness");
    info!("   Diet Options:       GET  http://{host}:{port}/plans/diet/options");
    info!("   Diet Lookup:        POST http://{host}:{port}/plans/diet");
    info!("Calculator:");
    info!("   Health Metrics:     POST http://{host}:{port}/calculator/health");
    info!("Journal & Feedback:");
    info!("   Wellness Journal:   POST http://{host}:{port}/wellness/journal");
    info!("   Feedback:           POST http://{host}:{port}/feedback");
    info!("=== End of Endpoint List ===");
}
