// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Builds the Cross-Origin Resource Sharing layer from the configured origin list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::CorsConfig;
use crate::constants::headers;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Configure CORS settings for the coach feedback server
///
/// A wildcard entry, an empty list or a list with no parsable origin allows
/// any origin and any request header. Otherwise only the listed origins and
/// a fixed set of headers are allowed.
///
/// ```bash
/// # Allow all origins (development)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow the mobile web client only
/// export CORS_ALLOWED_ORIGINS="https://coach.example.com"
/// ```
#[must_use]
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let (allow_origin, allow_headers) = if config.allows_any_origin() || origins.is_empty() {
        (AllowOrigin::any(), AllowHeaders::any())
    } else {
        (
            AllowOrigin::list(origins),
            AllowHeaders::list([
                HeaderName::from_static("content-type"),
                HeaderName::from_static("accept"),
                HeaderName::from_static("origin"),
                HeaderName::from_static("x-requested-with"),
                HeaderName::from_static(headers::REQUEST_ID),
            ]),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers(allow_headers)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .expose_headers([HeaderName::from_static(headers::REQUEST_ID)])
}
