// ABOUTME: Training plan model and session type enumeration
// ABOUTME: Plans are immutable values replaced wholesale by the plan adjuster
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Intent of today's workout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Conversational aerobic run
    #[default]
    EasyRun,
    /// Very light jog prescribed when the athlete is sore
    RecoveryJog,
}

impl SessionType {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EasyRun => "easy_run",
            Self::RecoveryJog => "recovery_jog",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Today's prescribed session
///
/// Unsigned fields make a negative pace or duration unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Workout category
    pub session_type: SessionType,
    /// Target pace in seconds per kilometer
    pub target_pace_s_per_km: u32,
    /// Planned duration in minutes
    pub duration_min: u32,
}

impl Default for TrainingPlan {
    /// 30 minutes of easy running at 6:00/km
    fn default() -> Self {
        Self {
            session_type: SessionType::EasyRun,
            target_pace_s_per_km: defaults::TARGET_PACE_S_PER_KM,
            duration_min: defaults::DURATION_MIN,
        }
    }
}
