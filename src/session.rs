// ABOUTME: Mutable per-process session state: today's plan, last telemetry sample and the journal
// ABOUTME: Each slot has its own lock so telemetry polling never waits on plan or journal writers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session State
//!
//! The server tracks a single athlete. Three slots hold its state, each
//! behind an independent lock:
//!
//! - the current [`TrainingPlan`]
//! - the most recent [`TelemetrySample`]
//! - the append-only journal of [`JournalEntry`] values
//!
//! Read-modify-write sequences take the slot lock once for the whole
//! sequence (see [`SessionState::update_plan`]), so concurrent updates
//! never lose each other's writes. No operation holds two slot locks at
//! the same time.

use chrono::{DateTime, Utc};
use coach_core::models::{JournalDraft, JournalEntry, TelemetrySample, TrainingPlan};
use tokio::sync::{Mutex, RwLock};

/// State for one tracked athlete
#[derive(Debug)]
pub struct SessionState {
    athlete_id: String,
    plan: RwLock<TrainingPlan>,
    last_sample: Mutex<TelemetrySample>,
    journal: RwLock<Vec<JournalEntry>>,
}

impl SessionState {
    /// Fresh state: default plan, resting telemetry sample stamped now, empty journal
    #[must_use]
    pub fn new(athlete_id: impl Into<String>) -> Self {
        Self::with_plan(athlete_id, TrainingPlan::default())
    }

    /// Fresh state starting from `plan`
    #[must_use]
    pub fn with_plan(athlete_id: impl Into<String>, plan: TrainingPlan) -> Self {
        Self {
            athlete_id: athlete_id.into(),
            plan: RwLock::new(plan),
            last_sample: Mutex::new(TelemetrySample::initial(Utc::now())),
            journal: RwLock::new(Vec::new()),
        }
    }

    /// Label of the tracked athlete
    #[must_use]
    pub fn athlete_id(&self) -> &str {
        &self.athlete_id
    }

    // ================================================================================
    // Plan slot
    // ================================================================================

    /// Snapshot of the current plan
    pub async fn plan(&self) -> TrainingPlan {
        *self.plan.read().await
    }

    /// Replace the current plan
    pub async fn set_plan(&self, plan: TrainingPlan) {
        *self.plan.write().await = plan;
    }

    /// Read, transform and store the plan under one write lock
    ///
    /// `update` receives the current plan and returns the plan to store plus
    /// a value handed back to the caller.
    pub async fn update_plan<T>(&self, update: impl FnOnce(&TrainingPlan) -> (TrainingPlan, T)) -> T {
        let mut plan = self.plan.write().await;
        let (next, output) = update(&plan);
        *plan = next;
        output
    }

    // ================================================================================
    // Telemetry slot
    // ================================================================================

    /// Snapshot of the most recent telemetry sample
    pub async fn last_sample(&self) -> TelemetrySample {
        *self.last_sample.lock().await
    }

    /// Replace the most recent telemetry sample
    pub async fn set_last_sample(&self, sample: TelemetrySample) {
        *self.last_sample.lock().await = sample;
    }

    /// Derive the next sample from the stored one and store it, under one lock
    pub async fn advance_sample(
        &self,
        advance: impl FnOnce(&TelemetrySample) -> TelemetrySample,
    ) -> TelemetrySample {
        let mut last = self.last_sample.lock().await;
        let next = advance(&last);
        *last = next;
        next
    }

    // ================================================================================
    // Journal slot
    // ================================================================================

    /// Append an entry stamped with the current time
    ///
    /// Returns the stored entry and the journal length right after the append.
    pub async fn append_journal(&self, draft: JournalDraft) -> (JournalEntry, usize) {
        self.append_journal_at(draft, Utc::now()).await
    }

    /// Append an entry stamped with `now`
    ///
    /// The stamp is taken under the journal lock and never precedes the
    /// previous entry's, so timestamps are non-decreasing in append order
    /// even if the wall clock steps backwards. The returned length is read
    /// under the same lock.
    pub async fn append_journal_at(
        &self,
        draft: JournalDraft,
        now: DateTime<Utc>,
    ) -> (JournalEntry, usize) {
        let mut journal = self.journal.write().await;
        let ts = journal.last().map_or(now, |last| now.max(last.ts));
        let entry = draft.stamp(ts);
        journal.push(entry.clone());
        (entry, journal.len())
    }

    /// All journal entries, oldest first
    pub async fn journal(&self) -> Vec<JournalEntry> {
        self.journal.read().await.clone()
    }

    /// Number of journal entries
    pub async fn journal_len(&self) -> usize {
        self.journal.read().await.len()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(coach_core::constants::defaults::ATHLETE_ID)
    }
}
