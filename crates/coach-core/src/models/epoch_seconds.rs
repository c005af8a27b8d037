// ABOUTME: Serde helpers encoding UTC timestamps as fractional Unix epoch seconds
// ABOUTME: Used with #[serde(with = "epoch_seconds")] on every wire timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Convert a timestamp to seconds since the epoch with microsecond resolution
#[must_use]
pub fn to_f64(ts: &DateTime<Utc>) -> f64 {
    ts.timestamp_micros() as f64 / 1_000_000.0
}

/// Convert fractional epoch seconds back into a timestamp
///
/// Returns `None` for non-finite or out-of-range input.
#[must_use]
pub fn from_f64(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let micros = (seconds * 1_000_000.0).round();
    if micros < i64::MIN as f64 || micros > i64::MAX as f64 {
        return None;
    }
    Utc.timestamp_micros(micros as i64).single()
}

/// Serialize as `f64` seconds
///
/// # Errors
///
/// Propagates serializer errors
pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(to_f64(ts))
}

/// Deserialize from `f64` seconds
///
/// # Errors
///
/// Fails when the value is not a number or is not a representable instant
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = f64::deserialize(deserializer)?;
    from_f64(seconds).ok_or_else(|| de::Error::custom(format!("invalid epoch seconds: {seconds}")))
}
