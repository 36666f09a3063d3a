use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::dataset::DatasetSummary;
use crate::models::{SampleStudent, SAMPLE_STUDENTS};
use crate::AppState;

#[derive(Serialize)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub summary: DatasetSummary,
}

/// GET /api/stats: dataset summary, or demo figures when none was loaded.
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        success: true,
        summary: DatasetSummary::clone(&state.dataset),
    })
}

/// GET /api/sample-data
pub async fn sample_data() -> Json<[SampleStudent; 10]> {
    Json(SAMPLE_STUDENTS)
}
