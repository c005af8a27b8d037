// ABOUTME: Core types and constants for the coaching feedback backend
// ABOUTME: Foundation crate with domain models, physiological bands and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Core
//!
//! Foundation crate providing shared types and constants for the coaching
//! feedback backend. The engines in `coach-intelligence` and the HTTP server
//! both build on these types.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and the JSON error envelope
//! - **constants**: Physiological bands, default plan and default telemetry values
//! - **models**: `TrainingPlan`, `TelemetrySample`, `ReadinessReport`, `JournalEntry`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (plan, telemetry, readiness, journal)
pub mod models;
