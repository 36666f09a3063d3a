use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    let system = Router::new()
        .route("/health", get(handlers::system::health_check))
        .route("/metrics", get(handlers::system::metrics))
        .route("/status", get(handlers::system::status))
        .route("/api/status", get(handlers::system::status));

    let api = Router::new()
        .route("/api/predict", post(handlers::predict::predict))
        // Legacy single-page app posts here
        .route("/predict", post(handlers::predict::predict))
        .route("/api/stats", get(handlers::stats::stats))
        .route("/api/sample-data", get(handlers::stats::sample_data));

    // The frontend may be opened from a file:// page or another port
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let frontend = ServeDir::new(&state.config.frontend_dir);

    system
        .merge(api)
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
