// ABOUTME: Route module organization for the coach feedback server HTTP endpoints
// ABOUTME: One route struct per domain plus the JSON 404 fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the coach feedback server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the coaching service.

/// Health check route
pub mod health;
/// Training journal routes
pub mod journal;
/// Training plan routes
pub mod plan;
/// Live telemetry routes
pub mod telemetry;

pub use health::HealthRoutes;
pub use journal::JournalRoutes;
pub use plan::PlanRoutes;
pub use telemetry::TelemetryRoutes;

use crate::errors::AppError;
use axum::http::Uri;

/// Fallback for unknown paths: JSON `RESOURCE_NOT_FOUND` envelope
pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
