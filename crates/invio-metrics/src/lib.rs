pub mod collectors;
pub mod error;
pub mod middleware;
pub mod registry;
pub mod timer;
pub mod types;

pub use collectors::HttpMetrics;
pub use error::{MetricsError, Result};
pub use middleware::{MetricsLayer, MetricsMiddleware};
pub use registry::{CounterMetric, GaugeMetric, HistogramMetric, MetricsRegistry};
pub use timer::RequestTimer;
pub use types::{CollectedMetric, MetricDescriptor, MetricSample, MetricType, MetricValue};
