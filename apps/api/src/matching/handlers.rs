use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::gap::analyze_gap;
use crate::matching::ranker::{rank_jobs, RankedJob};
use crate::state::AppState;
use crate::storage;

#[derive(Deserialize)]
pub struct GapAnalysisRequest {
    pub user_id: Uuid,
    /// Optional at the wire level so a missing id is a 400, not a
    /// deserialization failure.
    pub job_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct GapAnalysisResponse {
    pub job_id: Uuid,
    pub missing_keywords: Vec<String>,
    pub coverage: f64,
}

/// POST /api/v1/insights/gap-analysis
pub async fn handle_gap_analysis(
    State(state): State<AppState>,
    Json(req): Json<GapAnalysisRequest>,
) -> Result<Json<GapAnalysisResponse>, AppError> {
    let job_id = req
        .job_id
        .ok_or_else(|| AppError::Validation("job_id is required".to_string()))?;

    let job = storage::get_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    // No résumé on file is not an error: the gap is simply everything.
    let resume_text = storage::get_latest_resume(&state.db, req.user_id)
        .await?
        .map(|r| r.text)
        .unwrap_or_default();

    let report = analyze_gap(&resume_text, job.matching_text());
    Ok(Json(GapAnalysisResponse {
        job_id: job.job_id,
        missing_keywords: report.missing_keywords,
        coverage: report.coverage,
    }))
}

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub results: Vec<RankedJob>,
}

/// POST /api/v1/recommendations/refresh
pub async fn handle_refresh_recommendations(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let resume_text = storage::get_latest_resume(&state.db, req.user_id)
        .await?
        .map(|r| r.text)
        .unwrap_or_default();

    let jobs = storage::list_jobs(&state.db).await?;
    tracing::debug!(
        user_id = %req.user_id,
        catalog_size = jobs.len(),
        "ranking catalog against latest resume"
    );

    let results = rank_jobs(&resume_text, &jobs);
    Ok(Json(RecommendationsResponse { results }))
}
