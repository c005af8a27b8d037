// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, seeded server resources and in-process routers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `coach_feedback_server`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use coach_feedback_server::{
    config::{CoachingConfig, ServerConfig},
    resources::ServerResources,
    server::build_router,
    services::CoachingService,
    session::SessionState,
};
use coach_intelligence::{NoiseSource, PlanAdjuster, RngNoise, TelemetrySimulator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::{Arc, Once};

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

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Test configuration with a fixed telemetry seed
pub fn test_config() -> ServerConfig {
    ServerConfig {
        coaching: CoachingConfig {
            telemetry_seed: Some(42),
            ..CoachingConfig::default()
        },
        ..ServerConfig::default()
    }
}

/// Server resources with a `ChaCha8` telemetry stream seeded with `seed`
pub fn create_test_server_resources(seed: u64) -> Arc<ServerResources> {
    init_test_logging();
    let config = test_config();
    let session = Arc::new(SessionState::new(config.coaching.athlete_id.clone()));
    let noise: Box<dyn NoiseSource + Send> =
        Box::new(RngNoise::new(ChaCha8Rng::seed_from_u64(seed)));
    let service = CoachingService::new(
        session,
        TelemetrySimulator::new(noise),
        PlanAdjuster::new(config.coaching.min_duration_min),
    );
    Arc::new(ServerResources::with_service(config, service))
}

/// Full router (routes plus middleware) over fresh seeded resources
pub fn create_test_router() -> (axum::Router, Arc<ServerResources>) {
    let resources = create_test_server_resources(7);
    (build_router(Arc::clone(&resources)), resources)
}
