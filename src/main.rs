use std::sync::Arc;

use placement::api::router::create_router;
use placement::config::AppConfig;
use placement::dataset::DatasetSummary;
use placement::intelligence::{DecisionEngine, LogisticModel, TrainedClassifier};
use placement::metrics::init_metrics;
use placement::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr();

    tracing::info!("Starting placement predictor...");

    let engine = DecisionEngine::new(load_classifier(&config));
    let dataset = load_dataset(&config);
    let metrics_handle = init_metrics();

    let model_type = if engine.has_classifier() { "real" } else { "demo" };
    tracing::info!(
        model = model_type,
        dataset = %dataset.data_source,
        frontend = %config.frontend_dir.display(),
        "Service ready"
    );

    let state = AppState::new(config, engine, dataset, metrics_handle);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

/// Load the trained classifier once; any failure means demo mode.
fn load_classifier(config: &AppConfig) -> Option<Arc<dyn TrainedClassifier>> {
    match LogisticModel::from_path(&config.model_path) {
        Ok(model) => {
            tracing::info!(path = %config.model_path.display(), "Model loaded");
            let model: Arc<dyn TrainedClassifier> = Arc::new(model);
            Some(model)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Model unavailable, running in demo mode");
            None
        }
    }
}

fn load_dataset(config: &AppConfig) -> DatasetSummary {
    match DatasetSummary::from_path(&config.dataset_path) {
        Ok(summary) => {
            tracing::info!(
                path = %config.dataset_path.display(),
                records = summary.total_students,
                "Dataset loaded"
            );
            summary
        }
        Err(e) => {
            tracing::warn!(error = %e, "Dataset unavailable, serving demo stats");
            DatasetSummary::demo()
        }
    }
}

/// `RUST_LOG` filters; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
