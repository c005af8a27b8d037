// ABOUTME: Main library entry point for the coach feedback server
// ABOUTME: Session state, coaching service, configuration, logging and HTTP transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Feedback Server
//!
//! A backend that tracks one athlete's training day: it serves today's
//! plan, simulates live biometric telemetry, adjusts the plan from
//! self-reported readiness and records free-form journal entries.
//!
//! ## Architecture
//!
//! - **`coach-core`**: domain models, physiological bands and the error type
//! - **`coach-intelligence`**: the telemetry simulator and plan adjuster
//! - **Session**: three independently locked slots (plan, last sample, journal)
//! - **Services**: read-modify-write sequences over the session
//! - **Routes**: thin axum handlers delegating to the services
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use coach_feedback_server::config::ServerConfig;
//! use coach_feedback_server::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::new(config));
//!     coach_feedback_server::server::run(resources).await
//! }
//! ```

/// Configuration loaded from the environment
pub mod config;

/// Server constants and re-exported domain constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Logging setup and structured domain events
pub mod logging;

/// HTTP middleware: CORS, request ids and tracing
pub mod middleware;

/// Shared resources handed to route handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Business logic over the session state
pub mod services;

/// Per-athlete mutable state
pub mod session;

pub use coach_core::models;
