use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex, RwLock,
        atomic::{AtomicI64, AtomicU64, Ordering},
    },
};

use tracing::error;

use crate::{
    error::{MetricsError, Result},
    types::{CollectedMetric, MetricDescriptor, MetricSample, MetricType, MetricValue},
};

type LabelValues = Vec<String>;

pub struct MetricsRegistry {
    inner: RwLock<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    metrics: HashMap<String, RegisteredMetric>,
    order: Vec<String>,
}

enum RegisteredMetric {
    Counter(Arc<CounterMetric>),
    Gauge(Arc<GaugeMetric>),
    Histogram(Arc<HistogramMetric>),
}

impl RegisteredMetric {
    fn descriptor(&self) -> &MetricDescriptor {
        match self {
            Self::Counter(metric) => &metric.descriptor,
            Self::Gauge(metric) => &metric.descriptor,
            Self::Histogram(metric) => &metric.descriptor,
        }
    }

    fn collect(&self) -> Vec<MetricSample> {
        match self {
            Self::Counter(metric) => metric.collect(),
            Self::Gauge(metric) => metric.collect(),
            Self::Histogram(metric) => metric.collect(),
        }
    }

    fn kind(&self) -> &'static str {
        self.descriptor().metric_type.as_prometheus_type()
    }
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner::default()),
        }
    }

    pub fn register_counter(
        &self,
        name: &str,
        help: &str,
        variable_labels: &[&str],
    ) -> Result<Arc<CounterMetric>> {
        let descriptor = MetricDescriptor {
            name: name.to_string(),
            help: help.to_string(),
            metric_type: MetricType::Counter,
            variable_labels: variable_labels.iter().map(|label| (*label).to_string()).collect(),
        };

        let mut inner = self.inner.write().map_err(|_| MetricsError::LockPoisoned)?;
        if let Some(existing) = inner.metrics.get(name) {
            return match existing {
                RegisteredMetric::Counter(metric) if metric.descriptor == descriptor => {
                    Ok(metric.clone())
                }
                _ => Err(MetricsError::ShapeMismatch(name.to_string())),
            };
        }

        let metric = Arc::new(CounterMetric::new(descriptor));
        inner
            .metrics
            .insert(name.to_string(), RegisteredMetric::Counter(metric.clone()));
        inner.order.push(name.to_string());
        Ok(metric)
    }

    pub fn register_gauge(&self, name: &str, help: &str) -> Result<Arc<GaugeMetric>> {
        let descriptor = MetricDescriptor {
            name: name.to_string(),
            help: help.to_string(),
            metric_type: MetricType::Gauge,
            variable_labels: Vec::new(),
        };

        let mut inner = self.inner.write().map_err(|_| MetricsError::LockPoisoned)?;
        if let Some(existing) = inner.metrics.get(name) {
            return match existing {
                RegisteredMetric::Gauge(metric) if metric.descriptor == descriptor => {
                    Ok(metric.clone())
                }
                _ => Err(MetricsError::ShapeMismatch(name.to_string())),
            };
        }

        let metric = Arc::new(GaugeMetric::new(descriptor));
        inner
            .metrics
            .insert(name.to_string(), RegisteredMetric::Gauge(metric.clone()));
        inner.order.push(name.to_string());
        Ok(metric)
    }

    pub fn register_histogram(
        &self,
        name: &str,
        help: &str,
        variable_labels: &[&str],
        buckets: &[f64],
    ) -> Result<Arc<HistogramMetric>> {
        let mut sorted_buckets = buckets.to_vec();
        sorted_buckets.sort_by(|left, right| left.total_cmp(right));

        let descriptor = MetricDescriptor {
            name: name.to_string(),
            help: help.to_string(),
            metric_type: MetricType::Histogram,
            variable_labels: variable_labels.iter().map(|label| (*label).to_string()).collect(),
        };

        let mut inner = self.inner.write().map_err(|_| MetricsError::LockPoisoned)?;
        if let Some(existing) = inner.metrics.get(name) {
            return match existing {
                RegisteredMetric::Histogram(metric)
                    if metric.descriptor == descriptor && metric.buckets == sorted_buckets =>
                {
                    Ok(metric.clone())
                }
                _ => Err(MetricsError::ShapeMismatch(name.to_string())),
            };
        }

        let metric = Arc::new(HistogramMetric::new(descriptor, sorted_buckets));
        inner
            .metrics
            .insert(name.to_string(), RegisteredMetric::Histogram(metric.clone()));
        inner.order.push(name.to_string());
        Ok(metric)
    }

    pub fn counter(&self, name: &str) -> Result<Arc<CounterMetric>> {
        let inner = self.inner.read().map_err(|_| MetricsError::LockPoisoned)?;
        match inner.metrics.get(name) {
            Some(RegisteredMetric::Counter(metric)) => Ok(metric.clone()),
            Some(other) => Err(MetricsError::KindMismatch {
                name: name.to_string(),
                kind: other.kind(),
            }),
            None => Err(MetricsError::NotRegistered(name.to_string())),
        }
    }

    pub fn gauge(&self, name: &str) -> Result<Arc<GaugeMetric>> {
        let inner = self.inner.read().map_err(|_| MetricsError::LockPoisoned)?;
        match inner.metrics.get(name) {
            Some(RegisteredMetric::Gauge(metric)) => Ok(metric.clone()),
            Some(other) => Err(MetricsError::KindMismatch {
                name: name.to_string(),
                kind: other.kind(),
            }),
            None => Err(MetricsError::NotRegistered(name.to_string())),
        }
    }

    pub fn histogram(&self, name: &str) -> Result<Arc<HistogramMetric>> {
        let inner = self.inner.read().map_err(|_| MetricsError::LockPoisoned)?;
        match inner.metrics.get(name) {
            Some(RegisteredMetric::Histogram(metric)) => Ok(metric.clone()),
            Some(other) => Err(MetricsError::KindMismatch {
                name: name.to_string(),
                kind: other.kind(),
            }),
            None => Err(MetricsError::NotRegistered(name.to_string())),
        }
    }

    pub fn increment_counter(&self, name: &str, label_values: &[&str]) -> Result<()> {
        self.counter(name)?.inc_one(label_values);
        Ok(())
    }

    pub fn observe_histogram(&self, name: &str, label_values: &[&str], value: f64) -> Result<()> {
        self.histogram(name)?.observe(label_values, value);
        Ok(())
    }

    pub fn increment_gauge(&self, name: &str) -> Result<()> {
        self.gauge(name)?.inc();
        Ok(())
    }

    pub fn decrement_gauge(&self, name: &str) -> Result<()> {
        self.gauge(name)?.dec();
        Ok(())
    }

    pub fn collect_all(&self) -> Vec<CollectedMetric> {
        let inner = match self.inner.read() {
            Ok(guard) => guard,
            Err(_) => {
                error!("metrics registry lock poisoned, rendering empty snapshot");
                return Vec::new();
            }
        };

        inner
            .order
            .iter()
            .filter_map(|name| inner.metrics.get(name))
            .map(|metric| CollectedMetric {
                descriptor: metric.descriptor().clone(),
                samples: metric.collect(),
            })
            .collect()
    }

    pub fn render_prometheus(&self) -> String {
        let metrics = self.collect_all();
        let mut output = String::new();

        for metric in metrics {
            output.push_str("# HELP ");
            output.push_str(&metric.descriptor.name);
            output.push(' ');
            output.push_str(&escape_help(&metric.descriptor.help));
            output.push('\n');

            output.push_str("# TYPE ");
            output.push_str(&metric.descriptor.name);
            output.push(' ');
            output.push_str(metric.descriptor.metric_type.as_prometheus_type());
            output.push('\n');

            for sample in metric.samples {
                match sample.value {
                    MetricValue::Counter(value) => {
                        output.push_str(&render_sample_line(
                            &metric.descriptor.name,
                            &sample.labels,
                            &value.to_string(),
                        ));
                    }
                    MetricValue::Gauge(value) => {
                        output.push_str(&render_sample_line(
                            &metric.descriptor.name,
                            &sample.labels,
                            &value.to_string(),
                        ));
                    }
                    MetricValue::Histogram {
                        buckets,
                        count,
                        sum,
                    } => {
                        let mut cumulative = 0_u64;
                        for (bound, bucket_count) in buckets {
                            cumulative = cumulative.saturating_add(bucket_count);
                            let mut labels = sample.labels.clone();
                            labels.push(("le".to_string(), format_bucket_bound(bound)));
                            output.push_str(&render_sample_line(
                                &format!("{}_bucket", metric.descriptor.name),
                                &labels,
                                &cumulative.to_string(),
                            ));
                        }

                        output.push_str(&render_sample_line(
                            &format!("{}_sum", metric.descriptor.name),
                            &sample.labels,
                            &format_sample_value(sum),
                        ));
                        output.push_str(&render_sample_line(
                            &format!("{}_count", metric.descriptor.name),
                            &sample.labels,
                            &count.to_string(),
                        ));
                    }
                }
            }
        }

        output
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CounterMetric {
    descriptor: MetricDescriptor,
    series: RwLock<CounterSeries>,
}

#[derive(Default)]
struct CounterSeries {
    cells: HashMap<LabelValues, Arc<AtomicU64>>,
    order: Vec<LabelValues>,
}

impl CounterMetric {
    fn new(descriptor: MetricDescriptor) -> Self {
        Self {
            descriptor,
            series: RwLock::new(CounterSeries::default()),
        }
    }

    pub fn inc(&self, labels: &[&str], value: u64) {
        let cell = self.get_or_create_series(labels);
        cell.fetch_add(value, Ordering::Relaxed);
    }

    pub fn inc_one(&self, labels: &[&str]) {
        self.inc(labels, 1);
    }

    fn get_or_create_series(&self, labels: &[&str]) -> Arc<AtomicU64> {
        let label_values = normalize_labels(&self.descriptor, labels);
        if let Ok(guard) = self.series.read()
            && let Some(existing) = guard.cells.get(&label_values)
        {
            return existing.clone();
        }

        match self.series.write() {
            Ok(mut guard) => {
                if let Some(existing) = guard.cells.get(&label_values) {
                    return existing.clone();
                }

                let cell = Arc::new(AtomicU64::new(0));
                guard.cells.insert(label_values.clone(), cell.clone());
                guard.order.push(label_values);
                cell
            }
            Err(_) => {
                error!(metric = %self.descriptor.name, "counter series lock poisoned");
                Arc::new(AtomicU64::new(0))
            }
        }
    }

    fn collect(&self) -> Vec<MetricSample> {
        let series = match self.series.read() {
            Ok(guard) => guard,
            Err(_) => return Vec::new(),
        };

        series
            .order
            .iter()
            .filter_map(|label_values| {
                series.cells.get(label_values).map(|cell| MetricSample {
                    labels: materialize_labels(&self.descriptor, label_values),
                    value: MetricValue::Counter(cell.load(Ordering::Relaxed)),
                })
            })
            .collect()
    }
}

pub struct GaugeMetric {
    descriptor: MetricDescriptor,
    value: AtomicI64,
}

impl GaugeMetric {
    fn new(descriptor: MetricDescriptor) -> Self {
        Self {
            descriptor,
            value: AtomicI64::new(0),
        }
    }

    pub fn inc(&self) {
        self.add(1);
    }

    pub fn dec(&self) {
        self.add(-1);
    }

    pub fn add(&self, delta: i64) {
        self.value.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn set(&self, value: i64) {
        self.value.store(value, Ordering::Relaxed);
    }

    pub fn value(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }

    fn collect(&self) -> Vec<MetricSample> {
        vec![MetricSample {
            labels: Vec::new(),
            value: MetricValue::Gauge(self.value()),
        }]
    }
}

pub struct HistogramMetric {
    descriptor: MetricDescriptor,
    buckets: Vec<f64>,
    series: RwLock<HistogramSeriesMap>,
}

#[derive(Default)]
struct HistogramSeriesMap {
    cells: HashMap<LabelValues, Arc<HistogramSeries>>,
    order: Vec<LabelValues>,
}

struct HistogramSeries {
    bucket_counts: Vec<AtomicU64>,
    count: AtomicU64,
    sum: Mutex<f64>,
}

impl HistogramSeries {
    fn new(bucket_len: usize) -> Self {
        Self {
            bucket_counts: (0..bucket_len + 1).map(|_| AtomicU64::new(0)).collect(),
            count: AtomicU64::new(0),
            sum: Mutex::new(0.0),
        }
    }
}

impl HistogramMetric {
    fn new(descriptor: MetricDescriptor, buckets: Vec<f64>) -> Self {
        Self {
            descriptor,
            buckets,
            series: RwLock::new(HistogramSeriesMap::default()),
        }
    }

    pub fn observe(&self, labels: &[&str], value: f64) {
        let series = self.get_or_create_series(labels);

        let bucket_index = self
            .buckets
            .iter()
            .position(|bound| value <= *bound)
            .unwrap_or(self.buckets.len());

        if let Some(bucket) = series.bucket_counts.get(bucket_index) {
            bucket.fetch_add(1, Ordering::Relaxed);
        }

        series.count.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut sum) = series.sum.lock() {
            *sum += value;
        }
    }

    fn get_or_create_series(&self, labels: &[&str]) -> Arc<HistogramSeries> {
        let label_values = normalize_labels(&self.descriptor, labels);
        if let Ok(guard) = self.series.read()
            && let Some(existing) = guard.cells.get(&label_values)
        {
            return existing.clone();
        }

        match self.series.write() {
            Ok(mut guard) => {
                if let Some(existing) = guard.cells.get(&label_values) {
                    return existing.clone();
                }

                let cell = Arc::new(HistogramSeries::new(self.buckets.len()));
                guard.cells.insert(label_values.clone(), cell.clone());
                guard.order.push(label_values);
                cell
            }
            Err(_) => {
                error!(metric = %self.descriptor.name, "histogram series lock poisoned");
                Arc::new(HistogramSeries::new(self.buckets.len()))
            }
        }
    }

    fn collect(&self) -> Vec<MetricSample> {
        let series = match self.series.read() {
            Ok(guard) => guard,
            Err(_) => return Vec::new(),
        };

        series
            .order
            .iter()
            .filter_map(|label_values| {
                series.cells.get(label_values).map(|entry| {
                    let mut buckets = self
                        .buckets
                        .iter()
                        .enumerate()
                        .map(|(index, bound)| {
                            (*bound, entry.bucket_counts[index].load(Ordering::Relaxed))
                        })
                        .collect::<Vec<_>>();

                    let inf_count = entry.bucket_counts[self.buckets.len()].load(Ordering::Relaxed);
                    buckets.push((f64::INFINITY, inf_count));

                    let sum = match entry.sum.lock() {
                        Ok(value) => *value,
                        Err(_) => 0.0,
                    };

                    MetricSample {
                        labels: materialize_labels(&self.descriptor, label_values),
                        value: MetricValue::Histogram {
                            buckets,
                            count: entry.count.load(Ordering::Relaxed),
                            sum,
                        },
                    }
                })
            })
            .collect()
    }
}

fn normalize_labels(descriptor: &MetricDescriptor, labels: &[&str]) -> LabelValues {
    let expected = descriptor.variable_labels.len();
    (0..expected)
        .map(|index| labels.get(index).copied().unwrap_or_default().to_string())
        .collect()
}

fn materialize_labels(descriptor: &MetricDescriptor, values: &[String]) -> Vec<(String, String)> {
    descriptor
        .variable_labels
        .iter()
        .zip(values.iter())
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

fn render_sample_line(name: &str, labels: &[(String, String)], value: &str) -> String {
    let mut rendered = String::new();
    rendered.push_str(name);

    if !labels.is_empty() {
        rendered.push('{');
        for (index, (key, label_value)) in labels.iter().enumerate() {
            if index > 0 {
                rendered.push(',');
            }
            rendered.push_str(key);
            rendered.push_str("=\"");
            rendered.push_str(&escape_label_value(label_value));
            rendered.push('"');
        }
        rendered.push('}');
    }

    rendered.push(' ');
    rendered.push_str(value);
    rendered.push('\n');
    rendered
}

fn format_sample_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn format_bucket_bound(value: f64) -> String {
    if value.is_infinite() {
        "+Inf".to_string()
    } else {
        value.to_string()
    }
}

fn escape_help(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\n', "\\n")
}

fn escape_label_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_counter_is_idempotent_for_identical_shape() {
        let registry = MetricsRegistry::new();
        let first = registry
            .register_counter("jobs_total", "Jobs processed", &["kind"])
            .unwrap();
        let second = registry
            .register_counter("jobs_total", "Jobs processed", &["kind"])
            .unwrap();

        first.inc_one(&["sync"]);
        second.inc_one(&["sync"]);

        let rendered = registry.render_prometheus();
        assert!(rendered.contains(r#"jobs_total{kind="sync"} 2"#));
    }

    #[test]
    fn register_rejects_shape_changes() {
        let registry = MetricsRegistry::new();
        registry
            .register_counter("jobs_total", "Jobs processed", &["kind"])
            .unwrap();

        let relabeled = registry.register_counter("jobs_total", "Jobs processed", &["kind", "state"]);
        assert!(matches!(relabeled, Err(MetricsError::ShapeMismatch(_))));

        let rehelped = registry.register_counter("jobs_total", "Jobs finished", &["kind"]);
        assert!(matches!(rehelped, Err(MetricsError::ShapeMismatch(_))));

        let retyped = registry.register_gauge("jobs_total", "Jobs processed");
        assert!(matches!(retyped, Err(MetricsError::ShapeMismatch(_))));
    }

    #[test]
    fn histogram_shape_includes_buckets() {
        let registry = MetricsRegistry::new();
        registry
            .register_histogram("latency_seconds", "Latency", &["route"], &[0.1, 0.5])
            .unwrap();

        let rebucketed =
            registry.register_histogram("latency_seconds", "Latency", &["route"], &[0.1, 0.5, 1.0]);
        assert!(matches!(rebucketed, Err(MetricsError::ShapeMismatch(_))));

        registry
            .register_histogram("latency_seconds", "Latency", &["route"], &[0.5, 0.1])
            .unwrap();
    }

    #[test]
    fn updates_to_unknown_names_fail_loudly() {
        let registry = MetricsRegistry::new();

        assert!(matches!(
            registry.increment_counter("missing_total", &[]),
            Err(MetricsError::NotRegistered(_))
        ));
        assert!(matches!(
            registry.increment_gauge("missing"),
            Err(MetricsError::NotRegistered(_))
        ));
        assert!(matches!(
            registry.observe_histogram("missing_seconds", &[], 0.1),
            Err(MetricsError::NotRegistered(_))
        ));

        registry
            .register_counter("jobs_total", "Jobs processed", &[])
            .unwrap();
        assert!(matches!(
            registry.observe_histogram("jobs_total", &[], 0.1),
            Err(MetricsError::KindMismatch { .. })
        ));
    }

    #[test]
    fn gauge_tracks_both_directions() {
        let registry = MetricsRegistry::new();
        let gauge = registry.register_gauge("active_connections", "Active connections").unwrap();

        registry.increment_gauge("active_connections").unwrap();
        registry.increment_gauge("active_connections").unwrap();
        registry.decrement_gauge("active_connections").unwrap();
        assert_eq!(gauge.value(), 1);

        gauge.set(5);
        gauge.add(-2);
        assert_eq!(gauge.value(), 3);

        let rendered = registry.render_prometheus();
        assert!(rendered.contains("# TYPE active_connections gauge\nactive_connections 3\n"));
    }

    #[test]
    fn histogram_renders_cumulative_buckets() {
        let registry = MetricsRegistry::new();
        let histogram = registry
            .register_histogram("request_seconds", "Request duration", &["route"], &[0.1, 0.5, 1.0])
            .unwrap();

        histogram.observe(&["/api"], 0.25);
        histogram.observe(&["/api"], 0.5);
        histogram.observe(&["/api"], 2.0);

        let rendered = registry.render_prometheus();
        assert!(rendered.contains(r#"request_seconds_bucket{route="/api",le="0.1"} 0"#));
        assert!(rendered.contains(r#"request_seconds_bucket{route="/api",le="0.5"} 2"#));
        assert!(rendered.contains(r#"request_seconds_bucket{route="/api",le="1"} 2"#));
        assert!(rendered.contains(r#"request_seconds_bucket{route="/api",le="+Inf"} 3"#));
        assert!(rendered.contains(r#"request_seconds_sum{route="/api"} 2.75"#));
        assert!(rendered.contains(r#"request_seconds_count{route="/api"} 3"#));
    }

    #[test]
    fn render_preserves_registration_and_series_order() {
        let registry = MetricsRegistry::new();
        let counter = registry
            .register_counter("zeta_total", "Zeta events", &["kind"])
            .unwrap();
        registry
            .register_gauge("alpha_connections", "Alpha connections")
            .unwrap();

        counter.inc_one(&["late"]);
        counter.inc_one(&["early"]);

        let rendered = registry.render_prometheus();
        let zeta = rendered.find("# HELP zeta_total").unwrap();
        let alpha = rendered.find("# HELP alpha_connections").unwrap();
        assert!(zeta < alpha);

        let late = rendered.find(r#"zeta_total{kind="late"}"#).unwrap();
        let early = rendered.find(r#"zeta_total{kind="early"}"#).unwrap();
        assert!(late < early);
    }

    #[test]
    fn render_is_byte_identical_across_calls() {
        let registry = MetricsRegistry::new();
        let counter = registry
            .register_counter("http_requests_total", "Total number of HTTP requests", &["method"])
            .unwrap();
        let histogram = registry
            .register_histogram("request_seconds", "Request duration", &["method"], &[0.5])
            .unwrap();
        registry.register_gauge("active_connections", "Active connections").unwrap();

        counter.inc_one(&["GET"]);
        histogram.observe(&["GET"], 0.25);

        let first = registry.render_prometheus();
        let second = registry.render_prometheus();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn render_escapes_help_and_label_values() {
        let registry = MetricsRegistry::new();
        let counter = registry
            .register_counter("odd_total", "Says \"odd\"\nwith a \\ twist", &["path"])
            .unwrap();
        counter.inc_one(&["/a\"b\\c\nd"]);

        let rendered = registry.render_prometheus();
        assert!(rendered.contains("# HELP odd_total Says \"odd\"\\nwith a \\\\ twist\n"));
        assert!(rendered.contains(r#"odd_total{path="/a\"b\\c\nd"} 1"#));
    }

    #[test]
    fn missing_label_values_are_padded_with_empty_strings() {
        let registry = MetricsRegistry::new();
        let counter = registry
            .register_counter("partial_total", "Partial labels", &["method", "route"])
            .unwrap();
        counter.inc_one(&["GET"]);

        let rendered = registry.render_prometheus();
        assert!(rendered.contains(r#"partial_total{method="GET",route=""} 1"#));
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let registry = MetricsRegistry::new();
        registry
            .register_counter("jobs_total", "Jobs processed", &["worker"])
            .unwrap();
        registry.register_gauge("active_connections", "Active connections").unwrap();
        registry
            .register_histogram("job_seconds", "Job duration", &[], &[0.1, 1.0])
            .unwrap();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..1000 {
                        registry.increment_counter("jobs_total", &["worker-1"]).unwrap();
                        registry.increment_gauge("active_connections").unwrap();
                        registry.observe_histogram("job_seconds", &[], 0.05).unwrap();
                        registry.decrement_gauge("active_connections").unwrap();
                    }
                });
            }
        });

        let rendered = registry.render_prometheus();
        assert!(rendered.contains(r#"jobs_total{worker="worker-1"} 8000"#));
        assert!(rendered.contains("active_connections 0\n"));
        assert!(rendered.contains(r#"job_seconds_bucket{le="0.1"} 8000"#));
        assert!(rendered.contains("job_seconds_count 8000\n"));
    }
}
