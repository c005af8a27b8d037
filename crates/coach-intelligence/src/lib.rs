// ABOUTME: Coaching intelligence engines for plan adjustment and telemetry simulation
// ABOUTME: Pure computation over coach-core types, callers own all shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Intelligence
//!
//! Two engines, both free of I/O and locking:
//!
//! - [`PlanAdjuster`] applies the readiness rule set to the current plan and
//!   reports which rules fired.
//! - [`TelemetrySimulator`] produces the next biometric sample from the previous
//!   one by a bounded random walk. Its randomness comes from an injectable
//!   [`NoiseSource`].

/// Readiness-driven training plan adjustment
pub mod plan_adjuster;

/// Bounded random-walk telemetry simulator
pub mod telemetry_simulator;

/// Randomness abstraction used by the simulator
pub mod noise;

pub use noise::{NoiseSource, RngNoise};
pub use plan_adjuster::{PlanAdjuster, PlanAdjustment, PlanModifier};
pub use telemetry_simulator::TelemetrySimulator;
