use axum::Json;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Current server time as float epoch seconds
    pub timestamp: f64,
}

/// GET /health - liveness probe
pub async fn health_check() -> Result<Json<HealthResponse>, AppError> {
    info!("Health check requested");

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::Internal(format!("system clock before epoch: {}", e)))?
        .as_secs_f64();

    Ok(Json(HealthResponse {
        status: "healthy",
        timestamp,
    }))
}
