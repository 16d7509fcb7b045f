//! Prometheus metrics for HINTA plugin servers

use crate::error::ServerError;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};
use std::sync::OnceLock;

/// Global metrics instance
static METRICS: OnceLock<Metrics> = OnceLock::new();

/// Latency buckets: 5ms to 5s
const DURATION_BUCKETS: &[f64] = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0];

/// All HINTA server metrics
pub struct Metrics {
    /// Requests served (by method, final status code, plugin name)
    pub requests_total: CounterVec,

    /// Full handler latency in seconds (by method, plugin name)
    pub request_duration_seconds: HistogramVec,
}

impl Metrics {
    /// Initialize metrics (call once at startup)
    ///
    /// Returns error if metric registration fails.
    pub fn init() -> Result<&'static Metrics, ServerError> {
        if let Some(metrics) = METRICS.get() {
            return Ok(metrics);
        }

        let metrics = Metrics {
            requests_total: register_counter_vec!(
                "hinta_requests_total",
                "Total RPC requests served",
                &["method", "status_code", "plugin"]
            )
            .map_err(|e| ServerError::Metrics(format!("requests_total: {e}")))?,

            request_duration_seconds: register_histogram_vec!(
                "hinta_request_duration_seconds",
                "RPC handler latency including plugin logic",
                &["method", "plugin"],
                DURATION_BUCKETS.to_vec()
            )
            .map_err(|e| ServerError::Metrics(format!("request_duration_seconds: {e}")))?,
        };

        // Set the metrics (only succeeds once)
        let _ = METRICS.set(metrics);

        METRICS
            .get()
            .ok_or_else(|| ServerError::Metrics("failed to initialize metrics".to_string()))
    }

    /// Get the global metrics instance
    ///
    /// Returns None if metrics haven't been initialized yet.
    pub fn get() -> Option<&'static Metrics> {
        METRICS.get()
    }

    /// Record one served request with its final status
    pub fn record_request(&self, method: &str, status_code: &str, plugin: &str) {
        self.requests_total
            .with_label_values(&[method, status_code, plugin])
            .inc();
    }

    /// Record full handler latency
    pub fn observe_duration(&self, method: &str, plugin: &str, seconds: f64) {
        self.request_duration_seconds
            .with_label_values(&[method, plugin])
            .observe(seconds);
    }
}

/// Gather all metrics and encode as Prometheus text format
///
/// Returns the metrics as a String, ready to be served via HTTP.
pub fn gather() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if encoder.encode(&metric_families, &mut buffer).is_ok() {
        String::from_utf8(buffer).unwrap_or_default()
    } else {
        String::new()
    }
}
