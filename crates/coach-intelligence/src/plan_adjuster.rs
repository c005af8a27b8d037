// ABOUTME: Deterministic readiness rule set that down-regulates today's training plan
// ABOUTME: Rules are evaluated independently in a fixed order and compound on the same fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Adjuster Module
//!
//! Three rules are checked against a [`ReadinessReport`], always in this order:
//!
//! 1. `sleep<6h` - sleep under 6 hours: duration x0.8 (floored), pace +10 s/km
//! 2. `fatigue>=8` - fatigue 8 or more: duration x0.8 (floored), applied on top of rule 1
//! 3. `soreness>=7` - soreness 7 or more: session becomes a recovery jog, pace +15 s/km
//!
//! An absent field cannot fire its rule. The adjuster never reads or writes
//! session state; the caller fetches the plan, calls [`PlanAdjuster::adjust`]
//! and stores the result.

use coach_core::constants::{modifiers, readiness};
use coach_core::models::{ReadinessReport, SessionType, TrainingPlan};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a rule that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanModifier {
    /// Slept under six hours
    #[serde(rename = "sleep<6h")]
    ShortSleep,
    /// Fatigue at or above eight
    #[serde(rename = "fatigue>=8")]
    HighFatigue,
    /// Soreness at or above seven
    #[serde(rename = "soreness>=7")]
    HighSoreness,
}

impl PlanModifier {
    /// Rule identifier as reported to clients
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShortSleep => modifiers::SLEEP_UNDER_6H,
            Self::HighFatigue => modifiers::FATIGUE_AT_LEAST_8,
            Self::HighSoreness => modifiers::SORENESS_AT_LEAST_7,
        }
    }
}

impl fmt::Display for PlanModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one adjustment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAdjustment {
    /// Replacement plan
    pub plan: TrainingPlan,
    /// Rules that fired, in evaluation order
    pub modifiers: Vec<PlanModifier>,
}

impl PlanAdjustment {
    /// Whether any rule fired
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.modifiers.is_empty()
    }
}

/// Applies the readiness rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanAdjuster {
    min_duration_min: u32,
}

impl Default for PlanAdjuster {
    fn default() -> Self {
        Self::new(readiness::DEFAULT_MIN_DURATION_MIN)
    }
}

impl PlanAdjuster {
    /// Create an adjuster whose duration reductions never go below `min_duration_min`
    ///
    /// A floor below one minute is raised to one minute.
    #[must_use]
    pub const fn new(min_duration_min: u32) -> Self {
        let min_duration_min = if min_duration_min < readiness::LOWEST_MIN_DURATION_MIN {
            readiness::LOWEST_MIN_DURATION_MIN
        } else {
            min_duration_min
        };
        Self { min_duration_min }
    }

    /// Lower bound applied to `duration_min`
    #[must_use]
    pub const fn min_duration_min(&self) -> u32 {
        self.min_duration_min
    }

    /// Apply every rule whose condition holds and return the new plan
    ///
    /// A report without any signal returns an identical plan and no modifiers.
    #[must_use]
    pub fn adjust(&self, current: &TrainingPlan, report: &ReadinessReport) -> PlanAdjustment {
        let mut plan = *current;
        let mut fired = Vec::with_capacity(3);

        if report
            .sleep_hours
            .is_some_and(|hours| hours < readiness::SLEEP_HOURS_THRESHOLD)
        {
            plan.duration_min = self.reduce_duration(plan.duration_min);
            plan.target_pace_s_per_km = plan
                .target_pace_s_per_km
                .saturating_add(readiness::SLEEP_PACE_PENALTY_S);
            fired.push(PlanModifier::ShortSleep);
        }

        if report
            .fatigue
            .is_some_and(|fatigue| fatigue >= readiness::FATIGUE_THRESHOLD)
        {
            plan.duration_min = self.reduce_duration(plan.duration_min);
            fired.push(PlanModifier::HighFatigue);
        }

        if report
            .soreness
            .is_some_and(|soreness| soreness >= readiness::SORENESS_THRESHOLD)
        {
            plan.session_type = SessionType::RecoveryJog;
            plan.target_pace_s_per_km = plan
                .target_pace_s_per_km
                .saturating_add(readiness::SORENESS_PACE_PENALTY_S);
            fired.push(PlanModifier::HighSoreness);
        }

        tracing::debug!(
            modifiers = ?fired,
            duration_min = plan.duration_min,
            target_pace_s_per_km = plan.target_pace_s_per_km,
            "Readiness rules evaluated"
        );

        PlanAdjustment {
            plan,
            modifiers: fired,
        }
    }

    /// Scale by 0.8 rounding down, then apply the floor
    fn reduce_duration(&self, duration_min: u32) -> u32 {
        let reduced = u64::from(duration_min) * readiness::DURATION_REDUCTION_NUMERATOR
            / readiness::DURATION_REDUCTION_DENOMINATOR;
        // reduced <= duration_min, so it fits back into u32
        (reduced as u32).max(self.min_duration_min)
    }
}
