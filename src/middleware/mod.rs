// ABOUTME: HTTP middleware for request tracing, request ids and CORS
// ABOUTME: Layers applied around every route by the server router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and correlation
pub use tracing::{
    create_request_span, log_requests, propagate_request_id_layer, set_request_id_layer,
    trace_layer, RequestSpan, UuidRequestId,
};
