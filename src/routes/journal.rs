// ABOUTME: Training journal route handlers: append free-form entries and list them in order
// ABOUTME: Timestamps are assigned server-side at append time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

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
use coach_core::models::JournalDraft;
use std::sync::Arc;

/// Journal routes
pub struct JournalRoutes;

impl JournalRoutes {
    /// Create all journal routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/journal/log", post(Self::handle_log_entry))
            .route("/journal", get(Self::handle_list_journal))
            .with_state(resources)
    }

    /// Handle appending an entry
    async fn handle_log_entry(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<JournalDraft>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(draft) = body.map_err(|rejection| from_json_rejection(&rejection))?;

        resources.coaching.log_journal(draft).await?;
        Ok((StatusCode::OK, Json(serde_json::json!({ "ok": true }))).into_response())
    }

    /// Handle listing the journal, oldest first
    async fn handle_list_journal(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let entries = resources.coaching.journal().await;
        Ok((StatusCode::OK, Json(entries)).into_response())
    }
}
