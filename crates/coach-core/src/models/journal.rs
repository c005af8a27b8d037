// ABOUTME: Free-form journal entries appended by the athlete
// ABOUTME: Drafts arrive without a timestamp, stored entries carry the server-assigned one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::epoch_seconds;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Journal entry as submitted by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalDraft {
    /// Entry tag, e.g. "note" or "post_run"
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Free text
    pub text: String,
    /// Optional opaque snapshot of metrics at logging time
    #[serde(default)]
    pub metrics: Option<Map<String, Value>>,
}

impl JournalDraft {
    /// Build a draft without a metrics snapshot
    pub fn new(entry_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            text: text.into(),
            metrics: None,
        }
    }

    /// Attach a metrics snapshot
    #[must_use]
    pub fn with_metrics(mut self, metrics: Map<String, Value>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Reject a blank `type` tag
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` when `type` is empty or whitespace
    pub fn validate(&self) -> AppResult<()> {
        if self.entry_type.trim().is_empty() {
            return Err(AppError::missing_field("type"));
        }
        Ok(())
    }

    /// Stamp the draft, producing an immutable entry
    #[must_use]
    pub fn stamp(self, ts: DateTime<Utc>) -> JournalEntry {
        JournalEntry {
            ts,
            entry_type: self.entry_type,
            text: self.text,
            metrics: self.metrics,
        }
    }
}

/// Stored journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Append time
    #[serde(with = "epoch_seconds")]
    pub ts: DateTime<Utc>,
    /// Entry tag
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Free text
    pub text: String,
    /// Metrics snapshot, serialized as `null` when absent
    pub metrics: Option<Map<String, Value>>,
}
