use std::{sync::Arc, time::Instant};

use axum::{Router, routing::get};
use invio_metrics::{HttpMetrics, MetricsLayer, MetricsRegistry, Result};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers;

pub struct AppState {
    pub registry: Arc<MetricsRegistry>,
    pub http_metrics: Arc<HttpMetrics>,
    started_at: Instant,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let registry = Arc::new(MetricsRegistry::new());
        let http_metrics = Arc::new(HttpMetrics::register(&registry)?);

        Ok(Self {
            registry,
            http_metrics,
            started_at: Instant::now(),
        })
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::prometheus_metrics))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::new())
        .layer(MetricsLayer::new(Arc::clone(&state.http_metrics)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
