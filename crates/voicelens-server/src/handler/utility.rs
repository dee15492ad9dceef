//! Utility handlers.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use voicelens_core::ServiceStatus;

use crate::service::ServiceState;

/// Aggregate health report for the pipeline's services.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthReport {
    /// Worst status across the three services.
    pub status: ServiceStatus,
}

/// Handles `GET /health`.
pub async fn health(State(state): State<ServiceState>) -> Json<HealthReport> {
    let checks = [
        state.services.ocr.health_check().await,
        state.services.chat.health_check().await,
        state.services.speech.health_check().await,
    ];

    let status = checks
        .iter()
        .map(|check| match check {
            Ok(health) => health.status,
            Err(_) => ServiceStatus::Unhealthy,
        })
        .max_by_key(|status| match status {
            ServiceStatus::Healthy => 0,
            ServiceStatus::Degraded => 1,
            ServiceStatus::Unhealthy => 2,
        })
        .unwrap_or_default();

    Json(HealthReport { status })
}
