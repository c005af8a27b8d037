// ABOUTME: Error types re-exported from coach-core for use across the server
// ABOUTME: Adds the conversion from axum JSON extraction failures into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! `AppError` and `ErrorCode` live in `coach-core` so every crate in the
//! workspace shares one error shape. This module re-exports them and maps
//! transport-level rejections onto the same envelope.

pub use coach_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};

use axum::extract::rejection::JsonRejection;

/// Convert a failed JSON extraction into a client error
///
/// Wrong field types, missing required fields and unparsable bodies all
/// report `INVALID_FORMAT` with axum's explanation in `details`.
#[must_use]
pub fn from_json_rejection(rejection: &JsonRejection) -> AppError {
    AppError::invalid_format("Request body does not match the expected shape").with_details(
        serde_json::json!({
            "reason": rejection.body_text(),
        }),
    )
}
