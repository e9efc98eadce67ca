//! Health check endpoint for container orchestration.
//!
//! Liveness probe: if the process can answer HTTP, it reports `ok` together
//! with its uptime and the current time. Used by Kubernetes, ECS, systemd and
//! load balancers to verify the service is alive.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::HEALTH_STATUS_OK;
use crate::uptime::process_uptime_secs;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the handler runs
    pub status: String,
    /// Seconds since process start
    pub uptime: f64,
    /// ISO-8601 UTC timestamp with millisecond precision, e.g. `2026-10-19T08:30:00.123Z`
    pub timestamp: String,
}

impl HealthResponse {
    /// Snapshot of the process state at the time of the call.
    pub fn now() -> Self {
        Self {
            status: HEALTH_STATUS_OK.to_string(),
            uptime: process_uptime_secs(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    tracing::info!("Health check hit");
    Json(HealthResponse::now())
}
