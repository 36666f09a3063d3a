use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::metrics;
use crate::models::{fun_message, PredictRequest, PredictResponse, Scores};
use crate::AppState;

/// POST /api/predict: classify a `{cgpa, iq}` pair.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let started = Instant::now();

    let scores = match parse_scores(payload) {
        Ok(scores) => scores,
        Err(e) => {
            tracing::warn!(error = %e, "Prediction request rejected");
            metrics::record_rejection();
            return Err(e);
        }
    };

    tracing::info!(cgpa = scores.cgpa, iq = scores.iq, "Prediction request");

    let evaluation = state.engine.evaluate(scores.cgpa, scores.iq).map_err(|e| {
        metrics::record_rejection();
        AppError::from(e)
    })?;

    if let Some(reason) = &evaluation.fallback {
        tracing::warn!(error = %reason, "Trained classifier unavailable, using heuristic");
        metrics::record_fallback();
    }

    let decision = evaluation.decision;
    let message = fun_message(decision.label(), &mut rand::thread_rng());

    metrics::record_prediction(
        decision.source(),
        decision.label(),
        started.elapsed().as_secs_f64(),
    );
    tracing::info!(
        label = %decision.label(),
        source = %decision.source(),
        probability = decision.probability(),
        "Prediction served"
    );

    Ok(Json(PredictResponse::new(&decision, scores, message)))
}

fn parse_scores(payload: Result<Json<PredictRequest>, JsonRejection>) -> Result<Scores, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    Ok(request.validate()?)
}
