// ABOUTME: Core data models for the coaching feedback backend
// ABOUTME: Re-exports plan, telemetry, readiness and journal types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `TrainingPlan`: today's prescribed session, replaced wholesale on every adjustment
//! - `TelemetrySample`: one simulated biometric snapshot
//! - `ReadinessReport`: transient self-assessment consumed by the plan adjuster
//! - `JournalDraft` / `JournalEntry`: free-form log entries before and after time-stamping
//!
//! All timestamps travel on the wire as floating point seconds since the Unix epoch.

mod journal;
mod plan;
mod readiness;
mod telemetry;

/// Serde codec for `DateTime<Utc>` as fractional epoch seconds
pub mod epoch_seconds;

pub use journal::{JournalDraft, JournalEntry};
pub use plan::{SessionType, TrainingPlan};
pub use readiness::ReadinessReport;
pub use telemetry::TelemetrySample;
