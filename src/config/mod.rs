// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven ServerConfig and its sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the coach feedback server
//!
//! All settings come from environment variables; command-line flags in the
//! server binary may override the bind address afterwards.

/// Environment and server configuration
pub mod environment;

pub use environment::{CoachingConfig, CorsConfig, Environment, ServerConfig};
