// ABOUTME: Server binary entry point for the coach feedback API
// ABOUTME: Parses flags, loads configuration, initializes logging and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coach Feedback Server Binary
//!
//! Serves today's plan, simulated live telemetry, readiness-driven plan
//! adjustments and the training journal for a single athlete.

use anyhow::Result;
use clap::Parser;
use coach_feedback_server::{
    config::ServerConfig, logging, resources::ServerResources, server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "coach-feedback-server")]
#[command(about = "Coach feedback API - adaptive training plan and live telemetry")]
pub struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting coach feedback server");
    info!("{}", config.summary());

    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(config));
    if let Err(e) = server::run(resources).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!("   Health:            GET  {base}/healthz");
    info!("   Live Telemetry:    GET  {base}/metrics/current");
    info!("   Today's Plan:      GET  {base}/plan/today");
    info!("   Readiness Update:  POST {base}/plan/update");
    info!("   Journal Append:    POST {base}/journal/log");
    info!("   Journal List:      GET  {base}/journal");
    info!("=== End of Endpoint List ===");
}
