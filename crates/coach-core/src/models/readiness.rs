// ABOUTME: Readiness self-assessment submitted before a session
// ABOUTME: Every field is optional, an absent field is "no signal" rather than zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::readiness::{SCORE_MAX, SCORE_MIN, SLEEP_HOURS_MAX};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Subjective readiness signals used to down-regulate the plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadinessReport {
    /// Hours slept last night
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    /// General fatigue, 1 (fresh) to 10 (exhausted)
    #[serde(default)]
    pub fatigue: Option<i32>,
    /// Muscle soreness, 1 (none) to 10 (severe)
    #[serde(default)]
    pub soreness: Option<i32>,
}

impl ReadinessReport {
    /// True when no signal at all was reported
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sleep_hours.is_none() && self.fatigue.is_none() && self.soreness.is_none()
    }

    /// Check reported values against their plausible ranges
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` for non-finite or negative sleep, sleep above
    /// 24 hours, or a fatigue/soreness score outside 1..=10.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(hours) = self.sleep_hours {
            if !hours.is_finite() || !(0.0..=SLEEP_HOURS_MAX).contains(&hours) {
                return Err(AppError::out_of_range("sleep_hours", 0, SLEEP_HOURS_MAX));
            }
        }
        for (field, score) in [("fatigue", self.fatigue), ("soreness", self.soreness)] {
            if let Some(score) = score {
                if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
                    return Err(AppError::out_of_range(field, SCORE_MIN, SCORE_MAX));
                }
            }
        }
        Ok(())
    }
}
