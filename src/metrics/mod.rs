use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

// ============================================================================
// Metrics Module - Prometheus metrics for event dispatch
// ============================================================================
//
// Provides metrics for:
// - Events notified (with and without subscribers)
// - Handler invocations and failures
// - Dispatch latency per event type
// - Number of registered handlers
//
// The registry can be rendered with `encode_text` for scraping or logging.
// ============================================================================

/// Knobs for metric naming and histogram layout.
#[derive(Clone, Debug)]
pub struct MetricsConfig {
    /// Prefix applied to every metric name (`shop_events_notified_total`, ...)
    pub namespace: Option<String>,
    /// Buckets for `dispatch_duration_seconds`
    pub duration_buckets: Vec<f64>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            namespace: Some("shop".to_string()),
            duration_buckets: vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5],
        }
    }
}

/// Dispatch metrics, shared by every dispatcher created `with_metrics`.
pub struct Metrics {
    registry: Registry,

    // Event Metrics
    pub events_notified: IntCounterVec,
    pub events_unhandled: IntCounterVec,
    pub dispatch_duration: HistogramVec,

    // Handler Metrics
    pub handler_invocations: IntCounterVec,
    pub handler_failures: IntCounterVec,
    pub registered_handlers: IntGauge,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(MetricsConfig::default())
    }

    pub fn with_config(config: MetricsConfig) -> anyhow::Result<Self> {
        let registry = Registry::new();
        let opts = |name: &str, help: &str| {
            let opts = Opts::new(name, help);
            match &config.namespace {
                Some(ns) => opts.namespace(ns.clone()),
                None => opts,
            }
        };

        // Event Metrics
        let events_notified = IntCounterVec::new(
            opts("events_notified_total", "Total events passed to notify"),
            &["event_type"],
        )?;
        registry.register(Box::new(events_notified.clone()))?;

        let events_unhandled = IntCounterVec::new(
            opts("events_unhandled_total", "Events notified with no registered handler"),
            &["event_type"],
        )?;
        registry.register(Box::new(events_unhandled.clone()))?;

        let mut duration_opts = HistogramOpts::new(
            "dispatch_duration_seconds",
            "Time spent delivering one event to all its handlers",
        )
        .buckets(config.duration_buckets.clone());
        if let Some(ns) = &config.namespace {
            duration_opts = duration_opts.namespace(ns.clone());
        }
        let dispatch_duration = HistogramVec::new(duration_opts, &["event_type"])?;
        registry.register(Box::new(dispatch_duration.clone()))?;

        // Handler Metrics
        let handler_invocations = IntCounterVec::new(
            opts("handler_invocations_total", "Total handler invocations"),
            &["event_type", "handler"],
        )?;
        registry.register(Box::new(handler_invocations.clone()))?;

        let handler_failures = IntCounterVec::new(
            opts("handler_failures_total", "Handler invocations that returned an error"),
            &["event_type", "handler"],
        )?;
        registry.register(Box::new(handler_failures.clone()))?;

        let registered_handlers = IntGauge::with_opts(opts(
            "registered_handlers",
            "Handlers currently registered across all event types",
        ))?;
        registry.register(Box::new(registered_handlers.clone()))?;

        Ok(Self {
            registry,
            events_notified,
            events_unhandled,
            dispatch_duration,
            handler_invocations,
            handler_failures,
            registered_handlers,
        })
    }

    /// Get the Prometheus registry for exposing metrics
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn encode_text(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Helper to record a completed (or aborted) dispatch
    pub fn record_dispatch(&self, event_type: &str, handler_count: usize, duration_secs: f64) {
        self.events_notified.with_label_values(&[event_type]).inc();
        if handler_count == 0 {
            self.events_unhandled.with_label_values(&[event_type]).inc();
        }
        self.dispatch_duration.with_label_values(&[event_type]).observe(duration_secs);
    }

    /// Helper to record one handler call
    pub fn record_handler(&self, event_type: &str, handler: &str, success: bool) {
        self.handler_invocations.with_label_values(&[event_type, handler]).inc();
        if !success {
            self.handler_failures.with_label_values(&[event_type, handler]).inc();
        }
    }

    /// Helper to account for new registrations. The gauge sums over every
    /// dispatcher sharing these metrics.
    pub fn handlers_registered(&self, count: usize) {
        self.registered_handlers.add(count as i64);
    }

    /// Helper to account for removed registrations
    pub fn handlers_unregistered(&self, count: usize) {
        self.registered_handlers.sub(count as i64);
    }
}
