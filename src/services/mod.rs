// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Runs read-modify-write sequences over session state using the coaching engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin: they extract the request, call a service and
//! serialize the result. Validation, engine calls and state updates live here.

/// Telemetry, plan adjustment and journal operations for the tracked athlete
pub mod coaching;

pub use coaching::{CoachingService, PlanUpdate};
