use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Histogram buckets for request duration, in seconds
const DURATION_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

/// Initialize Prometheus metrics exporter
///
/// Installs the global recorder and returns the handle used by the
/// /metrics endpoint to render the exposition text. Panics if a recorder
/// is already installed; call once at server startup.
pub fn init_metrics() -> PrometheusHandle {
    let handle = PrometheusBuilder::new()
        .set_buckets(DURATION_BUCKETS)
        .expect("duration bucket list is non-empty")
        .install_recorder()
        .expect("Failed to install Prometheus recorder");

    init_metric_descriptions();

    handle
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!("http_requests_total", "Total HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration"
    );
}

/// Record a completed request
pub fn record_request(method: &str, endpoint: &str, status: u16) {
    counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
}

/// Record request duration
pub fn record_duration(method: &str, endpoint: &str, duration: Duration) {
    histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string(),
    )
    .record(duration.as_secs_f64());
}
