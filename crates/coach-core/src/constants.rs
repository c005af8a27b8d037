// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Physiological bands, simulator noise levels and plan adjustment thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat namespace.

/// Closed physiological bands every telemetry sample is clamped into
pub mod bands {
    /// Heart rate lower bound (bpm)
    pub const HR_MIN: u32 = 90;
    /// Heart rate upper bound (bpm)
    pub const HR_MAX: u32 = 185;
    /// Fastest pace (seconds per kilometer)
    pub const PACE_MIN_S_PER_KM: u32 = 300;
    /// Slowest pace (seconds per kilometer)
    pub const PACE_MAX_S_PER_KM: u32 = 480;
    /// Cadence lower bound (steps per minute)
    pub const CADENCE_MIN: u32 = 150;
    /// Cadence upper bound (steps per minute)
    pub const CADENCE_MAX: u32 = 190;
    /// Perceived effort lower bound (Borg CR10)
    pub const RPE_MIN: u32 = 1;
    /// Perceived effort upper bound (Borg CR10)
    pub const RPE_MAX: u32 = 10;
}

/// Random walk parameters for the telemetry simulator
pub mod simulation {
    /// Standard deviation of the heart rate step
    pub const HR_SIGMA: f64 = 2.0;
    /// Standard deviation of the pace step
    pub const PACE_SIGMA: f64 = 3.0;
    /// Standard deviation of the cadence step
    pub const CADENCE_SIGMA: f64 = 1.0;
    /// Standard deviation of the perceived effort step
    pub const RPE_SIGMA: f64 = 0.1;
    /// Smallest distance increment per tick (km)
    pub const DISTANCE_STEP_MIN_KM: f64 = 0.01;
    /// Largest distance increment per tick (km)
    pub const DISTANCE_STEP_MAX_KM: f64 = 0.03;
    /// Decimal places kept on `distance_km` (1 m resolution)
    pub const DISTANCE_DECIMALS: i32 = 3;
}

/// Readiness thresholds and the effect each rule has on the plan
pub mod readiness {
    /// Sleep below this many hours triggers the sleep rule
    pub const SLEEP_HOURS_THRESHOLD: f64 = 6.0;
    /// Fatigue at or above this score triggers the fatigue rule
    pub const FATIGUE_THRESHOLD: i32 = 8;
    /// Soreness at or above this score triggers the soreness rule
    pub const SORENESS_THRESHOLD: i32 = 7;
    /// The sleep and fatigue rules scale `duration_min` by NUMERATOR/DENOMINATOR (0.8),
    /// rounding down
    pub const DURATION_REDUCTION_NUMERATOR: u64 = 4;
    /// See [`DURATION_REDUCTION_NUMERATOR`]
    pub const DURATION_REDUCTION_DENOMINATOR: u64 = 5;
    /// Pace slowdown added by the sleep rule (s/km)
    pub const SLEEP_PACE_PENALTY_S: u32 = 10;
    /// Pace slowdown added by the soreness rule (s/km)
    pub const SORENESS_PACE_PENALTY_S: u32 = 15;
    /// Default floor for `duration_min` after adjustment
    pub const DEFAULT_MIN_DURATION_MIN: u32 = 1;
    /// Smallest floor accepted; a plan always lasts at least one minute
    pub const LOWEST_MIN_DURATION_MIN: u32 = 1;

    /// Self-reported score bounds accepted at the transport boundary
    pub const SCORE_MIN: i32 = 1;
    /// Self-reported score upper bound
    pub const SCORE_MAX: i32 = 10;
    /// Largest plausible nightly sleep
    pub const SLEEP_HOURS_MAX: f64 = 24.0;
}

/// Rule identifiers reported back to the client as plan modifiers
pub mod modifiers {
    /// Sleep rule identifier
    pub const SLEEP_UNDER_6H: &str = "sleep<6h";
    /// Fatigue rule identifier
    pub const FATIGUE_AT_LEAST_8: &str = "fatigue>=8";
    /// Soreness rule identifier
    pub const SORENESS_AT_LEAST_7: &str = "soreness>=7";
}

/// Values the session starts with before any request arrives
pub mod defaults {
    /// Default target pace, 6:00/km
    pub const TARGET_PACE_S_PER_KM: u32 = 360;
    /// Default session length
    pub const DURATION_MIN: u32 = 30;
    /// Resting-walk heart rate the simulator starts from
    pub const HR: u32 = 120;
    /// Initial simulated pace
    pub const PACE_S_PER_KM: u32 = 360;
    /// Initial simulated cadence
    pub const CADENCE: u32 = 172;
    /// Initial simulated perceived effort
    pub const RPE: u32 = 4;
    /// Label for the single tracked athlete
    pub const ATHLETE_ID: &str = "demo";
}
