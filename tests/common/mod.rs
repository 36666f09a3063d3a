use std::sync::Arc;

use placement::api::router::create_router;
use placement::config::AppConfig;
use placement::dataset::DatasetSummary;
use placement::intelligence::{ClassifierUnavailable, DecisionEngine, Features, TrainedClassifier};
use placement::AppState;

/// Classifier that always answers with the same label and probabilities.
#[allow(dead_code)]
pub struct StubClassifier {
    pub label: u8,
    pub probabilities: [f64; 2],
}

impl TrainedClassifier for StubClassifier {
    fn predict(&self, _features: &Features) -> Result<u8, ClassifierUnavailable> {
        Ok(self.label)
    }

    fn predict_probability(&self, _features: &Features) -> Result<[f64; 2], ClassifierUnavailable> {
        Ok(self.probabilities)
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Classifier whose every call fails, as if its artifact were corrupt.
#[allow(dead_code)]
pub struct FailingClassifier;

impl TrainedClassifier for FailingClassifier {
    fn predict(&self, _features: &Features) -> Result<u8, ClassifierUnavailable> {
        Err(ClassifierUnavailable::InvalidOutput("stub failure".into()))
    }

    fn predict_probability(&self, _features: &Features) -> Result<[f64; 2], ClassifierUnavailable> {
        Err(ClassifierUnavailable::InvalidOutput("stub failure".into()))
    }
}

/// Build a router around the given engine with demo dataset stats.
#[allow(dead_code)]
pub fn build_test_app(engine: DecisionEngine) -> axum::Router {
    build_test_app_with(engine, DatasetSummary::demo())
}

#[allow(dead_code)]
pub fn build_test_app_with(engine: DecisionEngine, dataset: DatasetSummary) -> axum::Router {
    let config = AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        frontend_dir: std::env::temp_dir().join("placement-test-no-frontend"),
        ..AppConfig::default()
    };
    let metrics_handle = placement::metrics::init_metrics();

    create_router(AppState::new(config, engine, dataset, metrics_handle))
}

#[allow(dead_code)]
pub fn placed_stub() -> DecisionEngine {
    DecisionEngine::with_classifier(Arc::new(StubClassifier {
        label: 1,
        probabilities: [0.13, 0.87],
    }))
}
