use axum::{extract::State, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extractor::ExtractedResume;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExtractTextRequest {
    pub user_id: Uuid,
    pub text: String,
}

/// POST /api/v1/resumes/extract
///
/// Proxies raw résumé text to the external extraction service and returns
/// the structured result. Nothing is persisted here — upload and storage are
/// owned elsewhere.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractTextRequest>,
) -> Result<Json<ExtractedResume>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation("text is required".to_string()));
    }

    tracing::debug!(user_id = %req.user_id, "extracting resume text");
    let extracted = state
        .extractor
        .extract(&req.text)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    Ok(Json(extracted))
}
