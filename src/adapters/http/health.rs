//! Liveness check.

use std::time::Instant;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct HealthState {
    started_at: Instant,
}

impl HealthState {
    pub fn new(started_at: Instant) -> Self {
        Self { started_at }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub uptime_secs: u64,
}

/// GET /api/health
pub async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

pub fn health_routes(state: HealthState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .with_state(state)
}
