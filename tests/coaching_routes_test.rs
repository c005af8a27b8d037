// ABOUTME: Integration tests for the coaching HTTP routes driven through the full router
// ABOUTME: Covers plan updates, journal ordering, telemetry polling, validation errors and middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::create_test_router;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

// ============================================================================
// Health and fallback
// ============================================================================

#[tokio::test]
async fn test_healthz() {
    let (app, _) = create_test_router();

    let body: Value = AxumTestRequest::get("/healthz")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn test_unknown_path_returns_error_envelope() {
    let (app, _) = create_test_router();

    let body: Value = AxumTestRequest::get("/plan/yesterday")
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();

    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

// ============================================================================
// Plan
// ============================================================================

#[tokio::test]
async fn test_default_plan() {
    let (app, _) = create_test_router();

    let body: Value = AxumTestRequest::get("/plan/today")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(
        body,
        json!({
            "session_type": "easy_run",
            "target_pace_s_per_km": 360,
            "duration_min": 30
        })
    );
}

#[tokio::test]
async fn test_readiness_update_compounds_and_persists() {
    let (app, _) = create_test_router();

    let body: Value = AxumTestRequest::post("/plan/update")
        .json(&json!({ "sleep_hours": 5.0, "fatigue": 9, "soreness": 8 }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(
        body["updated_plan"],
        json!({
            "session_type": "recovery_jog",
            "target_pace_s_per_km": 385,
            "duration_min": 19
        })
    );
    assert_eq!(body["modifiers"], json!(["sleep<6h", "fatigue>=8", "soreness>=7"]));

    let stored: Value = AxumTestRequest::get("/plan/today").send(app).await.json();
    assert_eq!(stored, body["updated_plan"]);
}

#[tokio::test]
async fn test_updates_apply_to_the_stored_plan() {
    let (app, _) = create_test_router();
    let report = json!({ "sleep_hours": 5.5 });

    for _ in 0..2 {
        AxumTestRequest::post("/plan/update")
            .json(&report)
            .send(app.clone())
            .await
            .assert_status(StatusCode::OK);
    }

    let stored: Value = AxumTestRequest::get("/plan/today").send(app).await.json();
    // 30 -> 24 -> 19, 360 -> 370 -> 380
    assert_eq!(stored["duration_min"], 19);
    assert_eq!(stored["target_pace_s_per_km"], 380);
}

#[tokio::test]
async fn test_empty_report_changes_nothing() {
    let (app, _) = create_test_router();

    let body: Value = AxumTestRequest::post("/plan/update")
        .json(&json!({}))
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["modifiers"], json!([]));
    assert_eq!(body["updated_plan"]["duration_min"], 30);
    assert_eq!(body["updated_plan"]["session_type"], "easy_run");
}

#[tokio::test]
async fn test_out_of_range_report_is_rejected() {
    let (app, _) = create_test_router();

    let body: Value = AxumTestRequest::post("/plan/update")
        .json(&json!({ "fatigue": 42 }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(body["error"]["details"]["field"], "fatigue");

    let stored: Value = AxumTestRequest::get("/plan/today").send(app).await.json();
    assert_eq!(stored["duration_min"], 30);
}

#[tokio::test]
async fn test_negative_sleep_is_rejected() {
    let (app, _) = create_test_router();

    let body: Value = AxumTestRequest::post("/plan/update")
        .json(&json!({ "sleep_hours": -1.0 }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
}

#[tokio::test]
async fn test_wrong_field_type_is_invalid_format() {
    let (app, _) = create_test_router();

    let body: Value = AxumTestRequest::post("/plan/update")
        .json(&json!({ "fatigue": "very" }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn test_malformed_json_is_invalid_format() {
    let (app, _) = create_test_router();

    let body: Value = AxumTestRequest::post("/plan/update")
        .raw_json("{\"sleep_hours\": ")
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
}

// ============================================================================
// Journal
// ============================================================================

#[tokio::test]
async fn test_journal_preserves_append_order() {
    let (app, _) = create_test_router();

    for (index, text) in ["warmup felt heavy", "splits on target", "cooldown walk"]
        .iter()
        .enumerate()
    {
        let body: Value = AxumTestRequest::post("/journal/log")
            .json(&json!({ "type": "note", "text": text, "metrics": { "lap": index } }))
            .send(app.clone())
            .await
            .assert_status(StatusCode::OK)
            .json();
        assert_eq!(body, json!({ "ok": true }));
    }

    let entries: Vec<Value> = AxumTestRequest::get("/journal")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["text"], "warmup felt heavy");
    assert_eq!(entries[1]["text"], "splits on target");
    assert_eq!(entries[2]["text"], "cooldown walk");
    assert_eq!(entries[2]["type"], "note");
    assert_eq!(entries[2]["metrics"]["lap"], 2);

    let stamps: Vec<f64> = entries.iter().map(|e| e["ts"].as_f64().unwrap()).collect();
    assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]), "{stamps:?}");
}

#[tokio::test]
async fn test_journal_starts_empty() {
    let (app, _) = create_test_router();

    let entries: Vec<Value> = AxumTestRequest::get("/journal").send(app).await.json();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_blank_journal_type_is_rejected() {
    let (app, resources) = create_test_router();

    let body: Value = AxumTestRequest::post("/journal/log")
        .json(&json!({ "type": "   ", "text": "something" }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(resources.session.journal_len().await, 0);
}

#[tokio::test]
async fn test_journal_without_text_is_invalid_format() {
    let (app, _) = create_test_router();

    let body: Value = AxumTestRequest::post("/journal/log")
        .json(&json!({ "type": "note" }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
}

// ============================================================================
// Telemetry
// ============================================================================

#[tokio::test]
async fn test_telemetry_polls_advance_the_stream() {
    let (app, resources) = create_test_router();
    let mut previous_distance = 0.0;

    for _ in 0..25 {
        let sample: Value = AxumTestRequest::get("/metrics/current")
            .send(app.clone())
            .await
            .assert_status(StatusCode::OK)
            .json();

        let hr = sample["hr"].as_u64().unwrap();
        let pace = sample["pace_s_per_km"].as_u64().unwrap();
        let cadence = sample["cadence"].as_u64().unwrap();
        let rpe = sample["rpe"].as_u64().unwrap();
        let distance = sample["distance_km"].as_f64().unwrap();

        assert!((90..=185).contains(&hr));
        assert!((300..=480).contains(&pace));
        assert!((150..=190).contains(&cadence));
        assert!((1..=10).contains(&rpe));
        assert!(distance > previous_distance);
        assert!(sample["ts"].as_f64().unwrap() > 1_600_000_000.0);
        previous_distance = distance;
    }

    let stored = resources.session.last_sample().await;
    assert!((stored.distance_km - previous_distance).abs() < 1e-9);
}

// ============================================================================
// Middleware
// ============================================================================

#[tokio::test]
async fn test_request_id_is_generated() {
    let (app, _) = create_test_router();

    let response = AxumTestRequest::get("/healthz").send(app).await;

    let request_id = response.header("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(&request_id).is_ok());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let (app, _) = create_test_router();

    let response = AxumTestRequest::get("/plan/today")
        .header("x-request-id", "client-supplied-42")
        .send(app)
        .await;

    assert_eq!(
        response.header("x-request-id").as_deref(),
        Some("client-supplied-42")
    );
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let (app, _) = create_test_router();

    let response = AxumTestRequest::get("/healthz")
        .header("origin", "http://localhost:19006")
        .send(app)
        .await;

    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = create_test_router();

    let response = AxumTestRequest::options("/plan/update")
        .header("origin", "http://localhost:19006")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send(app)
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
    assert!(response
        .header("access-control-allow-methods")
        .unwrap()
        .contains("POST"));
}

#[tokio::test]
async fn test_cors_preflight_accepts_any_request_header() {
    let (app, _) = create_test_router();

    let response = AxumTestRequest::options("/journal/log")
        .header("origin", "http://localhost:19006")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "x-client-build,authorization")
        .send(app)
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(
        response.header("access-control-allow-headers").as_deref(),
        Some("*")
    );
}
