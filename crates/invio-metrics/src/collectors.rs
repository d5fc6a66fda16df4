use std::sync::Arc;

use crate::{
    error::Result,
    registry::{CounterMetric, GaugeMetric, HistogramMetric, MetricsRegistry},
};

pub struct HttpMetrics {
    requests_total: Arc<CounterMetric>,
    request_duration_seconds: Arc<HistogramMetric>,
    active_connections: Arc<GaugeMetric>,
}

impl HttpMetrics {
    pub fn register(registry: &MetricsRegistry) -> Result<Self> {
        let requests_total = registry.register_counter(
            "http_requests_total",
            "Total number of HTTP requests",
            &["method", "route", "status"],
        )?;

        let request_duration_seconds = registry.register_histogram(
            "http_request_duration_seconds",
            "Duration of HTTP requests in seconds",
            &["method", "route", "status"],
            &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0],
        )?;

        let active_connections =
            registry.register_gauge("active_connections", "Number of active connections")?;

        Ok(Self {
            requests_total,
            request_duration_seconds,
            active_connections,
        })
    }

    pub fn record_request(&self, method: &str, route: &str, status: u16, elapsed_seconds: f64) {
        let status = status.to_string();
        let labels = [method, route, status.as_str()];
        self.request_duration_seconds.observe(&labels, elapsed_seconds);
        self.requests_total.inc_one(&labels);
    }

    pub fn connection_opened(&self) {
        self.active_connections.inc();
    }

    pub fn connection_closed(&self) {
        self.active_connections.dec();
    }

    pub fn active_connections(&self) -> i64 {
        self.active_connections.value()
    }
}
