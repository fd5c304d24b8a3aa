//! Metrics definitions for the gateway.
//!
//! Metrics are collected using the `metrics` crate and can be exported to
//! Prometheus via `metrics-exporter-prometheus`.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Instant;

/// Initialize all metric descriptions.
/// Call this once at startup before any metrics are recorded.
pub fn init_metrics() {
    describe_counter!(
        "rest_requests_total",
        "Total number of requests sent to the REST service"
    );
    describe_counter!(
        "rest_request_errors_total",
        "Total number of REST requests that failed at the transport level"
    );
    describe_histogram!(
        "rest_request_duration_seconds",
        "Time taken by a REST request in seconds"
    );
}

/// Record a completed REST request.
///
/// # Arguments
/// * `method` - HTTP method of the request
/// * `status` - HTTP status code of the response
pub fn record_rest_request(method: &str, status: u16) {
    counter!("rest_requests_total", "method" => method.to_string(), "status" => status.to_string())
        .increment(1);
}

/// Record a REST request that failed before producing a response.
pub fn record_rest_error(method: &str) {
    counter!("rest_request_errors_total", "method" => method.to_string()).increment(1);
}

/// Record the duration of a REST request.
pub fn record_rest_duration(duration_secs: f64) {
    histogram!("rest_request_duration_seconds").record(duration_secs);
}

/// A timer that automatically records duration when dropped.
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new request timer.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for RequestTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_rest_duration(duration);
    }
}
