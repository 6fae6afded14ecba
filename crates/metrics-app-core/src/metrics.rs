//! Process-wide metrics registry for the service.
//!
//! One `AppMetrics` is built at startup and shared by every handler. It owns a
//! private `prometheus::Registry` (never the crate-global default registry), so
//! each instance renders only its own instruments and tests can build as many
//! isolated registries as they like.
//!
//! Histogram buckets use the library defaults (`prometheus::DEFAULT_BUCKETS`).

use std::time::Duration;

use prometheus::{
    Encoder, Histogram, HistogramOpts, HistogramTimer, IntCounter, Opts, Registry, TextEncoder,
};

use crate::error::{AppError, Result};

/// Name of the greeting request counter.
pub const REQUESTS_TOTAL: &str = "python_app_requests_total";
/// Name of the greeting latency histogram (seconds).
pub const REQUEST_LATENCY_SECONDS: &str = "python_app_request_latency_seconds";

/// Content type of the text exposition format.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

#[derive(Clone)]
pub struct AppMetrics {
    registry: Registry,
    requests: IntCounter,
    latency: Histogram,
}

impl AppMetrics {
    /// Build the registry and register both instruments.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let requests = IntCounter::with_opts(Opts::new(REQUESTS_TOTAL, "Total app requests"))?;
        let latency =
            Histogram::with_opts(HistogramOpts::new(REQUEST_LATENCY_SECONDS, "Request latency"))?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(latency.clone()))?;
        tracing::debug!(counter = REQUESTS_TOTAL, histogram = REQUEST_LATENCY_SECONDS, "metrics registered");

        Ok(Self {
            registry,
            requests,
            latency,
        })
    }

    /// Count one greeting request.
    pub fn inc_requests(&self) {
        self.requests.inc();
    }

    /// Start timing a request. The elapsed seconds are observed when the timer
    /// is stopped or dropped, whichever comes first.
    pub fn start_latency_timer(&self) -> HistogramTimer {
        self.latency.start_timer()
    }

    /// Record an already measured duration.
    pub fn observe_latency(&self, elapsed: Duration) {
        self.latency.observe(elapsed.as_secs_f64());
    }

    pub fn requests_total(&self) -> u64 {
        self.requests.get()
    }

    pub fn latency_count(&self) -> u64 {
        self.latency.get_sample_count()
    }

    pub fn latency_sum_seconds(&self) -> f64 {
        self.latency.get_sample_sum()
    }

    /// Render every registered instrument in Prometheus text exposition format.
    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();

        encoder.encode(&metric_families, &mut buffer)?;

        String::from_utf8(buffer)
            .map_err(|e| AppError::Internal(format!("exposition is not utf-8: {e}")))
    }
}
