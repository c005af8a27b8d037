// ABOUTME: Synthetic biometric telemetry produced by a bounded random walk
// ABOUTME: Each tick perturbs the previous sample, clamps into physiological bands and adds distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::noise::{NoiseSource, RngNoise};
use chrono::{DateTime, Utc};
use coach_core::constants::{bands, simulation};
use coach_core::models::TelemetrySample;
use rand::rngs::StdRng;

/// Generates the next telemetry sample from the previous one
///
/// Heart rate, pace, cadence and effort take a normal step around their
/// previous value, are truncated to a whole number and clamped into their
/// band afterwards, whatever the input. Truncation pulls the walk down, so
/// effort drifts toward its floor and only climbs on large draws. Distance only moves forward, by 10 to 30 meters per tick, and is
/// kept to three decimals.
#[derive(Debug, Clone)]
pub struct TelemetrySimulator<N = RngNoise<StdRng>> {
    noise: N,
}

impl TelemetrySimulator {
    /// Simulator with a non-reproducible random source
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(RngNoise::from_entropy())
    }

    /// Simulator whose draws are reproducible for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngNoise::seeded(seed))
    }
}

impl<N: NoiseSource> TelemetrySimulator<N> {
    /// Simulator drawing from the supplied noise source
    pub const fn new(noise: N) -> Self {
        Self { noise }
    }

    /// Advance `previous` by one tick, stamped with the current wall-clock time
    pub fn advance(&mut self, previous: &TelemetrySample) -> TelemetrySample {
        self.advance_at(previous, Utc::now())
    }

    /// Advance `previous` by one tick, stamped with `now`
    pub fn advance_at(&mut self, previous: &TelemetrySample, now: DateTime<Utc>) -> TelemetrySample {
        let hr = self.walk(previous.hr, simulation::HR_SIGMA, bands::HR_MIN, bands::HR_MAX);
        let pace_s_per_km = self.walk(
            previous.pace_s_per_km,
            simulation::PACE_SIGMA,
            bands::PACE_MIN_S_PER_KM,
            bands::PACE_MAX_S_PER_KM,
        );
        let cadence = self.walk(
            previous.cadence,
            simulation::CADENCE_SIGMA,
            bands::CADENCE_MIN,
            bands::CADENCE_MAX,
        );
        let rpe = self.walk(previous.rpe, simulation::RPE_SIGMA, bands::RPE_MIN, bands::RPE_MAX);

        let step = self
            .noise
            .uniform(simulation::DISTANCE_STEP_MIN_KM, simulation::DISTANCE_STEP_MAX_KM)
            .clamp(simulation::DISTANCE_STEP_MIN_KM, simulation::DISTANCE_STEP_MAX_KM);
        let base = if previous.distance_km.is_finite() {
            previous.distance_km.max(0.0)
        } else {
            0.0
        };
        let distance_km = round_to_decimals(base + step, simulation::DISTANCE_DECIMALS);

        TelemetrySample {
            hr,
            pace_s_per_km,
            cadence,
            rpe,
            distance_km,
            ts: now,
        }
    }

    /// One normal step around `previous`, truncated and clamped into `[min, max]`
    fn walk(&mut self, previous: u32, std_dev: f64, min: u32, max: u32) -> u32 {
        let candidate = (f64::from(previous) + self.noise.gaussian(std_dev)).trunc();
        if candidate.is_nan() {
            return previous.clamp(min, max);
        }
        // Clamped to the band, so the cast is lossless
        candidate.clamp(f64::from(min), f64::from(max)) as u32
    }
}

fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
