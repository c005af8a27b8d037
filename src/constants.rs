// ABOUTME: Server-level constants: ports, service identity and environment variable names
// ABOUTME: Domain constants (bands, thresholds) live in coach-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Server constants. Physiological bands, readiness thresholds and default
//! plan values are re-exported from `coach_core::constants`.

pub use coach_core::constants::{bands, defaults, modifiers, readiness, simulation};

/// Network defaults
pub mod network {
    /// Default bind address
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8000;
    /// Wildcard accepted by `CORS_ALLOWED_ORIGINS`
    pub const CORS_ANY_ORIGIN: &str = "*";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported at startup
    pub const COACH_FEEDBACK_SERVER: &str = "coach-feedback-server";
}

/// HTTP header names
pub mod headers {
    /// Correlation header propagated through every request
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Environment variable names read by the configuration layer
pub mod env_keys {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma separated CORS origins or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Label of the tracked athlete
    pub const ATHLETE_ID: &str = "COACH_ATHLETE_ID";
    /// Optional simulator seed
    pub const TELEMETRY_SEED: &str = "COACH_TELEMETRY_SEED";
    /// Lower bound on adjusted plan duration
    pub const MIN_DURATION_MIN: &str = "COACH_MIN_DURATION_MIN";
    /// Log filter
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
