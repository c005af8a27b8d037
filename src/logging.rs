// ABOUTME: Logging configuration and structured logging setup for the coach feedback server
// ABOUTME: Configures env filters, output formats and domain events around coaching operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Logging configuration with structured output

use crate::constants::{env_keys, headers, service_names};
use anyhow::{anyhow, Result};
use coach_core::models::{TelemetrySample, TrainingPlan};
use coach_intelligence::PlanModifier;
use serde_json::json;
use std::env;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
    /// Request ID header name
    pub request_id_header: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty output
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            service_name: service_names::COACH_FEEDBACK_SERVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
            request_id_header: headers::REQUEST_ID.into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var(env_keys::RUST_LOG).unwrap_or_else(|_| "info".into());
        let format = LogFormat::from_str_or_default(
            &env::var(env_keys::LOG_FORMAT).unwrap_or_default(),
        );
        let environment =
            env::var(env_keys::ENVIRONMENT).unwrap_or_else(|_| "development".into());

        // Production gets source locations and span events
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: is_production || env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: service_names::COACH_FEEDBACK_SERVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
            request_id_header: headers::REQUEST_ID.into(),
        }
    }

    /// Build the env filter: `RUST_LOG` or the configured level, plus noise reduction
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let base = env::var(env_keys::RUST_LOG).map_or_else(
            |_| EnvFilter::new(&self.level),
            |env_directive| EnvFilter::new(env_directive),
        );

        [
            "hyper=warn".to_owned(),
            "hyper::proto=warn".to_owned(),
            "tower_http=info".to_owned(),
            format!("coach_feedback_server={}", self.level),
        ]
        .iter()
        .filter_map(|directive| directive.parse::<Directive>().ok())
        .fold(base, EnvFilter::add_directive)
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let installed = match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events)
                    .json();
                registry.with(json_layer).try_init()
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events);
                registry.with(pretty_layer).try_init()
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stdout)
                    .with_span_events(FmtSpan::NONE);
                registry.with(compact_layer).try_init()
            }
        };
        installed.map_err(|e| anyhow!("Failed to initialize tracing subscriber: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Coach feedback server starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "request_id_header": self.request_id_header,
                "features": {
                    "location": self.include_location,
                    "spans": self.include_spans
                }
            }
        });

        info!("Logging configured: {}", config_summary);
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log a readiness adjustment applied to the stored plan
    pub fn log_plan_adjusted(athlete_id: &str, plan: &TrainingPlan, modifiers: &[PlanModifier]) {
        let applied: Vec<&str> = modifiers.iter().copied().map(PlanModifier::as_str).collect();
        info!(
            athlete.id = %athlete_id,
            plan.session_type = %plan.session_type,
            plan.target_pace_s_per_km = plan.target_pace_s_per_km,
            plan.duration_min = plan.duration_min,
            plan.modifiers = ?applied,
            "Plan adjusted from readiness"
        );
    }

    /// Log a journal append
    pub fn log_journal_append(athlete_id: &str, entry_type: &str, total_entries: usize) {
        info!(
            athlete.id = %athlete_id,
            journal.entry_type = %entry_type,
            journal.total_entries = total_entries,
            "Journal entry appended"
        );
    }

    /// Log a telemetry tick; debug level since clients poll continuously
    pub fn log_telemetry_tick(athlete_id: &str, sample: &TelemetrySample) {
        debug!(
            athlete.id = %athlete_id,
            telemetry.hr = sample.hr,
            telemetry.pace_s_per_km = sample.pace_s_per_km,
            telemetry.cadence = sample.cadence,
            telemetry.rpe = sample.rpe,
            telemetry.distance_km = sample.distance_km,
            "Telemetry advanced"
        );
    }

    /// Log `API` requests
    pub fn log_api_request(method: &str, path: &str, status: u16, duration_ms: u64) {
        info!(
            http.method = %method,
            http.path = %path,
            http.status = %status,
            http.duration_ms = %duration_ms,
            "HTTP request"
        );
    }
}
