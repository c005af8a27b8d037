// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Liveness probe that always answers {"ok": true} while the process serves requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn healthz_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({ "ok": true }))
        }

        Router::new().route("/healthz", get(healthz_handler))
    }
}
