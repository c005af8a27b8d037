// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Bundles configuration, session state and the coaching service behind Arcs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::CoachingService;
use crate::session::SessionState;

/// Centralized resource container for dependency injection
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// State of the tracked athlete
    pub session: Arc<SessionState>,
    /// Coaching operations over `session`
    pub coaching: Arc<CoachingService>,
}

impl ServerResources {
    /// Create resources with a fresh session for the configured athlete
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let session = Arc::new(SessionState::new(config.coaching.athlete_id.clone()));
        let coaching = Arc::new(CoachingService::from_config(
            Arc::clone(&session),
            &config.coaching,
        ));
        Self {
            config: Arc::new(config),
            session,
            coaching,
        }
    }

    /// Create resources around an existing service
    #[must_use]
    pub fn with_service(config: ServerConfig, coaching: CoachingService) -> Self {
        let session = Arc::clone(coaching.session());
        Self {
            config: Arc::new(config),
            session,
            coaching: Arc::new(coaching),
        }
    }
}
