// ABOUTME: Training plan route handlers: read today's plan and apply readiness reports
// ABOUTME: Report bodies are range-checked by the service before the stored plan changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training plan routes
//!
//! `POST /plan/update` answers with the stored plan and the rules that fired:
//!
//! ```json
//! {
//!   "updated_plan": {"session_type": "recovery_jog", "target_pace_s_per_km": 385, "duration_min": 19},
//!   "modifiers": ["sleep<6h", "fatigue>=8", "soreness>=7"]
//! }
//! ```

use crate::{
    errors::{from_json_rejection, AppError},
    resources::ServerResources,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use coach_core::models::ReadinessReport;
use std::sync::Arc;

/// Training plan routes
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/plan/today", get(Self::handle_todays_plan))
            .route("/plan/update", post(Self::handle_update_plan))
            .with_state(resources)
    }

    /// Handle fetching today's plan
    async fn handle_todays_plan(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let plan = resources.coaching.todays_plan().await;
        Ok((StatusCode::OK, Json(plan)).into_response())
    }

    /// Handle a readiness report
    async fn handle_update_plan(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<ReadinessReport>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(report) = body.map_err(|rejection| from_json_rejection(&rejection))?;

        let update = resources.coaching.apply_readiness(report).await?;
        Ok((StatusCode::OK, Json(update)).into_response())
    }
}
