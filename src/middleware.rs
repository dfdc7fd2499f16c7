use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;

use crate::metrics;

/// Request-timing middleware
///
/// Wraps every route: logs the incoming request, times the handler,
/// updates the request counter and duration histogram, and attaches the
/// elapsed time as the X-Process-Time response header.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    info!("Incoming request: {} {}", method, path);

    let mut response = next.run(req).await;

    let elapsed = start.elapsed();
    let status = response.status().as_u16();

    metrics::record_request(method.as_str(), &path, status);
    metrics::record_duration(method.as_str(), &path, elapsed);

    let process_time = elapsed.as_secs_f64();
    if let Ok(value) = HeaderValue::from_str(&process_time.to_string()) {
        response.headers_mut().insert("x-process-time", value);
    }

    info!("Response: {} - Duration: {:.4}s", status, process_time);

    response
}
