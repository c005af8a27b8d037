// ABOUTME: Simulated biometric telemetry sample
// ABOUTME: Every field lives inside a fixed physiological band, distance never decreases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::epoch_seconds;
use crate::constants::{bands, defaults};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One snapshot of workout metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    /// Heart rate (bpm), within [`bands::HR_MIN`, `bands::HR_MAX`]
    pub hr: u32,
    /// Current pace (s/km), within [`bands::PACE_MIN_S_PER_KM`, `bands::PACE_MAX_S_PER_KM`]
    pub pace_s_per_km: u32,
    /// Cadence (spm), within [`bands::CADENCE_MIN`, `bands::CADENCE_MAX`]
    pub cadence: u32,
    /// Perceived effort, within [`bands::RPE_MIN`, `bands::RPE_MAX`]
    pub rpe: u32,
    /// Accumulated distance in kilometers
    pub distance_km: f64,
    /// Capture time
    #[serde(with = "epoch_seconds")]
    pub ts: DateTime<Utc>,
}

impl TelemetrySample {
    /// Starting sample for a fresh session, captured at `ts`
    #[must_use]
    pub const fn initial(ts: DateTime<Utc>) -> Self {
        Self {
            hr: defaults::HR,
            pace_s_per_km: defaults::PACE_S_PER_KM,
            cadence: defaults::CADENCE,
            rpe: defaults::RPE,
            distance_km: 0.0,
            ts,
        }
    }

    /// Whether every field lies inside its physiological band
    #[must_use]
    pub fn is_within_bands(&self) -> bool {
        (bands::HR_MIN..=bands::HR_MAX).contains(&self.hr)
            && (bands::PACE_MIN_S_PER_KM..=bands::PACE_MAX_S_PER_KM).contains(&self.pace_s_per_km)
            && (bands::CADENCE_MIN..=bands::CADENCE_MAX).contains(&self.cadence)
            && (bands::RPE_MIN..=bands::RPE_MAX).contains(&self.rpe)
            && self.distance_km.is_finite()
            && self.distance_km >= 0.0
    }
}

impl Default for TelemetrySample {
    fn default() -> Self {
        Self::initial(Utc::now())
    }
}
