use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::intelligence::{Label, Source};

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
///
/// Only one global recorder can exist per process; if one is already
/// installed (tests build many apps) a detached handle is returned instead.
pub fn init_metrics() -> PrometheusHandle {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    if metrics::set_global_recorder(recorder).is_err() {
        tracing::debug!("Metrics recorder already installed; using detached handle");
        return handle;
    }

    // Pre-register counters so they appear even before the first increment.
    for source in [Source::TrainedClassifier, Source::Heuristic] {
        for label in [Label::Placed, Label::NotPlaced] {
            counter!("predictions_total", "source" => source.as_str(), "label" => label.as_str())
                .absolute(0);
        }
    }
    counter!("prediction_rejections_total").absolute(0);
    counter!("classifier_fallbacks_total").absolute(0);

    histogram!("prediction_latency_seconds").record(0.0);

    handle
}

pub fn record_prediction(source: Source, label: Label, elapsed_secs: f64) {
    counter!("predictions_total", "source" => source.as_str(), "label" => label.as_str())
        .increment(1);
    histogram!("prediction_latency_seconds").record(elapsed_secs);
}

pub fn record_rejection() {
    counter!("prediction_rejections_total").increment(1);
}

pub fn record_fallback() {
    counter!("classifier_fallbacks_total").increment(1);
}
