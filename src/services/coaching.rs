// ABOUTME: Coaching business logic: telemetry ticks, readiness-driven plan updates and the journal
// ABOUTME: Couples the pure engines with session state, holding each slot lock across its update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use coach_core::models::{JournalDraft, JournalEntry, ReadinessReport, TelemetrySample, TrainingPlan};
use coach_intelligence::{NoiseSource, PlanAdjuster, PlanModifier, RngNoise, TelemetrySimulator};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::CoachingConfig;
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::session::SessionState;

/// Simulator with a type-erased noise source
pub type SharedSimulator = TelemetrySimulator<Box<dyn NoiseSource + Send>>;

/// Result of applying a readiness report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanUpdate {
    /// Plan stored after the adjustment
    pub updated_plan: TrainingPlan,
    /// Rules that fired, in evaluation order
    pub modifiers: Vec<PlanModifier>,
}

/// Coaching operations over one athlete's session
///
/// Lock order: the simulator lock is always taken before the telemetry slot
/// lock. Plan and journal operations take only their own slot lock.
pub struct CoachingService {
    session: Arc<SessionState>,
    simulator: Mutex<SharedSimulator>,
    adjuster: PlanAdjuster,
}

impl CoachingService {
    /// Service over `session` using the given simulator and adjuster
    #[must_use]
    pub fn new(session: Arc<SessionState>, simulator: SharedSimulator, adjuster: PlanAdjuster) -> Self {
        Self {
            session,
            simulator: Mutex::new(simulator),
            adjuster,
        }
    }

    /// Service built from configuration: seeded simulator when a seed is set
    #[must_use]
    pub fn from_config(session: Arc<SessionState>, config: &CoachingConfig) -> Self {
        let noise: Box<dyn NoiseSource + Send> = match config.telemetry_seed {
            Some(seed) => Box::new(RngNoise::seeded(seed)),
            None => Box::new(RngNoise::from_entropy()),
        };
        Self::new(
            session,
            TelemetrySimulator::new(noise),
            PlanAdjuster::new(config.min_duration_min),
        )
    }

    /// Session this service operates on
    #[must_use]
    pub const fn session(&self) -> &Arc<SessionState> {
        &self.session
    }

    /// Advance telemetry by one tick, store and return the new sample
    pub async fn current_telemetry(&self) -> TelemetrySample {
        let mut simulator = self.simulator.lock().await;
        let sample = self
            .session
            .advance_sample(|previous| simulator.advance(previous))
            .await;
        drop(simulator);

        AppLogger::log_telemetry_tick(self.session.athlete_id(), &sample);
        sample
    }

    /// Today's plan as currently stored
    pub async fn todays_plan(&self) -> TrainingPlan {
        self.session.plan().await
    }

    /// Validate `report`, adjust the stored plan and store the result
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if a report field is outside its range;
    /// the stored plan is left untouched in that case.
    pub async fn apply_readiness(&self, report: ReadinessReport) -> AppResult<PlanUpdate> {
        report.validate()?;

        let update = self
            .session
            .update_plan(|current| {
                let adjustment = self.adjuster.adjust(current, &report);
                (
                    adjustment.plan,
                    PlanUpdate {
                        updated_plan: adjustment.plan,
                        modifiers: adjustment.modifiers,
                    },
                )
            })
            .await;

        AppLogger::log_plan_adjusted(self.session.athlete_id(), &update.updated_plan, &update.modifiers);
        Ok(update)
    }

    /// Validate and append a journal entry stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` if the entry type is blank
    pub async fn log_journal(&self, draft: JournalDraft) -> AppResult<JournalEntry> {
        draft.validate()?;

        let (entry, total_entries) = self.session.append_journal(draft).await;
        AppLogger::log_journal_append(self.session.athlete_id(), &entry.entry_type, total_entries);
        Ok(entry)
    }

    /// Every journal entry, oldest first
    pub async fn journal(&self) -> Vec<JournalEntry> {
        self.session.journal().await
    }
}
