pub mod api;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod intelligence;
pub mod metrics;
pub mod models;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::dataset::DatasetSummary;
use crate::intelligence::DecisionEngine;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub engine: DecisionEngine,
    pub dataset: Arc<DatasetSummary>,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        engine: DecisionEngine,
        dataset: DatasetSummary,
        metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
    ) -> Self {
        Self {
            config,
            engine,
            dataset: Arc::new(dataset),
            metrics_handle,
            started_at: Utc::now(),
        }
    }
}
