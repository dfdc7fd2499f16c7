use axum::{extract::State, Json};
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info};

use crate::{error::AppError, server::AppState};

#[derive(Debug, Serialize)]
pub struct WorkResponse {
    pub status: &'static str,
    /// The actual delay slept, in seconds
    pub work_duration: f64,
    pub message: &'static str,
}

/// GET /simulate-work - sleep a random duration, fail with the configured
/// probability
pub async fn simulate_work(State(state): State<AppState>) -> Result<Json<WorkResponse>, AppError> {
    let outcome = state.simulator.draw();

    info!("Simulating work for {:.2} seconds", outcome.duration_seconds);
    tokio::time::sleep(Duration::from_secs_f64(outcome.duration_seconds)).await;

    if outcome.failed {
        error!("Simulated error occurred");
        return Err(AppError::Simulated);
    }

    info!("Work completed successfully");
    Ok(Json(WorkResponse {
        status: "completed",
        work_duration: outcome.duration_seconds,
        message: "Work simulation completed",
    }))
}
