//! `GET /api/health` — liveness and version.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;
use crate::config;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub active_sessions: usize,
}

pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    let active_sessions = ctx
        .sessions
        .lock()
        .map(|registry| registry.len())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "ok",
        version: config::APP_VERSION,
        active_sessions,
    })
}
