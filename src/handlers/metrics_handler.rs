use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::server::AppState;

/// Prometheus exposition content type
pub const CONTENT_TYPE_LATEST: &str = "text/plain; version=0.0.4; charset=utf-8";

/// GET /metrics - render the current state of all metric series
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics_handle.render();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, CONTENT_TYPE_LATEST)],
        body,
    )
}
