use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::AppState;

fn model_type(state: &AppState) -> &'static str {
    if state.engine.has_classifier() {
        "real"
    } else {
        "demo"
    }
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "healthy", "model": model_type(&state) }))
}

/// GET /status: model, dataset and uptime.
pub async fn status(State(state): State<AppState>) -> Json<Value> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds().max(0);

    Json(json!({
        "status": "online",
        "model_loaded": state.engine.has_classifier(),
        "model_type": model_type(&state),
        "classifier": state.engine.classifier_name(),
        "dataset_loaded": !state.dataset.is_demo(),
        "port": state.config.port,
        "started_at": state.started_at,
        "uptime_secs": uptime_secs,
    }))
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics_handle.render();
    ([(CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}
