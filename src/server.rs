// ABOUTME: HTTP server assembly and lifecycle: router construction, binding and graceful shutdown
// ABOUTME: The router is built separately so tests can drive it in-process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Lifecycle
//!
//! [`build_router`] merges every route group and wraps them in the
//! middleware stack. [`run`] binds the configured address and serves until
//! Ctrl-C or SIGTERM.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tracing::{info, warn};

use crate::middleware::{
    log_requests, propagate_request_id_layer, set_request_id_layer, setup_cors, trace_layer,
};
use crate::resources::ServerResources;
use crate::routes::{handle_not_found, HealthRoutes, JournalRoutes, PlanRoutes, TelemetryRoutes};

/// Assemble every route and middleware layer
///
/// Layer order, outermost first: request id assignment, trace span,
/// request logging, request id propagation onto the response, CORS.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(TelemetryRoutes::routes(Arc::clone(&resources)))
        .merge(PlanRoutes::routes(Arc::clone(&resources)))
        .merge(JournalRoutes::routes(resources))
        .fallback(handle_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(trace_layer())
                .layer(middleware::from_fn(log_requests))
                .layer(propagate_request_id_layer())
                .layer(cors),
        )
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("Coach feedback server listening on http://{}", address);

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    info!("Coach feedback server stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
