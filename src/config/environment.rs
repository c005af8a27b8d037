// ABOUTME: Environment-driven server configuration with typed defaults
// ABOUTME: Parses bind address, CORS origins and coaching knobs, rejecting malformed numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{defaults, env_keys, network, readiness};
use crate::errors::AppError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::info;

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origins; a single `*` allows any origin
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Whether every origin is allowed
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin == network::CORS_ANY_ORIGIN)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![network::CORS_ANY_ORIGIN.to_owned()],
        }
    }
}

/// Knobs for the coaching engines and the tracked session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoachingConfig {
    /// Label of the single tracked athlete
    pub athlete_id: String,
    /// Seed for reproducible telemetry; `None` draws from OS entropy
    pub telemetry_seed: Option<u64>,
    /// Lower bound on `duration_min` after readiness adjustments
    pub min_duration_min: u32,
}

impl Default for CoachingConfig {
    fn default() -> Self {
        Self {
            athlete_id: defaults::ATHLETE_ID.to_owned(),
            telemetry_seed: None,
            min_duration_min: readiness::DEFAULT_MIN_DURATION_MIN,
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Coaching engine settings
    pub coaching: CoachingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: network::DEFAULT_HOST.to_owned(),
            http_port: network::DEFAULT_HTTP_PORT,
            environment: Environment::Development,
            cors: CorsConfig::default(),
            coaching: CoachingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error if a numeric variable is set but
    /// cannot be parsed, or if the duration floor is below one minute
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let telemetry_seed = match env::var(env_keys::TELEMETRY_SEED) {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_value(env_keys::TELEMETRY_SEED, &raw)?),
            _ => None,
        };

        let min_duration_raw = env_var_or(
            env_keys::MIN_DURATION_MIN,
            &readiness::DEFAULT_MIN_DURATION_MIN.to_string(),
        );
        let min_duration_min: u32 = parse_value(env_keys::MIN_DURATION_MIN, &min_duration_raw)?;
        if min_duration_min < readiness::LOWEST_MIN_DURATION_MIN {
            return Err(
                AppError::config_invalid(env_keys::MIN_DURATION_MIN, &min_duration_raw).into(),
            );
        }

        let config = Self {
            host: env_var_or(env_keys::HOST, network::DEFAULT_HOST),
            http_port: parse_value(
                env_keys::HTTP_PORT,
                &env_var_or(env_keys::HTTP_PORT, &network::DEFAULT_HTTP_PORT.to_string()),
            )?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or(
                    env_keys::CORS_ALLOWED_ORIGINS,
                    network::CORS_ANY_ORIGIN,
                )),
            },
            coaching: CoachingConfig {
                athlete_id: env_var_or(env_keys::ATHLETE_ID, defaults::ATHLETE_ID),
                telemetry_seed,
                min_duration_min,
            },
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Socket address string the listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Coach Feedback Server Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Athlete: {}\n\
             - Telemetry Seed: {}\n\
             - Minimum Duration: {} min",
            self.bind_address(),
            self.environment,
            self.cors.allowed_origins.join(", "),
            self.coaching.athlete_id,
            self.coaching
                .telemetry_seed
                .map_or_else(|| "entropy".to_owned(), |seed| seed.to_string()),
            self.coaching.min_duration_min,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a raw environment value, reporting failures as `CONFIG_INVALID`
fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::config_invalid(key, raw).with_source(e))
        .with_context(|| format!("Invalid {key} value"))
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == network::CORS_ANY_ORIGIN {
        return vec![network::CORS_ANY_ORIGIN.to_owned()];
    }
    origins_str
        .split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}
