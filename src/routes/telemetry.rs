// ABOUTME: Live telemetry route handler
// ABOUTME: Every poll advances the simulated biometric stream by one tick
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::{errors::AppError, resources::ServerResources};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Telemetry routes
pub struct TelemetryRoutes;

impl TelemetryRoutes {
    /// Create all telemetry routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/metrics/current", get(Self::handle_current_metrics))
            .with_state(resources)
    }

    /// Handle a telemetry poll
    async fn handle_current_metrics(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let sample = resources.coaching.current_telemetry().await;
        Ok((StatusCode::OK, Json(sample)).into_response())
    }
}
