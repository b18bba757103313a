use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::ingest::sample::sample_candidates;
use crate::ingest::{parse_candidates, UploadKind};
use crate::models::candidate::Candidate;
use crate::screening::summary::{summarize, SummaryBar};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WorkingSetResponse {
    pub summary: SummaryBar,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Serialize)]
pub struct LoadedResponse {
    pub loaded: usize,
}

/// GET /api/v1/candidates
pub async fn handle_list(State(state): State<AppState>) -> Json<WorkingSetResponse> {
    let candidates = state.working_set.snapshot().await;
    Json(WorkingSetResponse {
        summary: summarize("Loaded", &candidates),
        candidates,
    })
}

/// PUT /api/v1/candidates
/// Replaces the working set with a pasted JSON array, read as raw bytes so
/// any content type is accepted. Rejected bodies leave the current set untouched.
pub async fn handle_replace(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoadedResponse>, AppError> {
    let candidates = parse_candidates(&body)?;
    let loaded = state.working_set.replace(candidates).await;
    info!(loaded, "Working set replaced from pasted JSON");
    Ok(Json(LoadedResponse { loaded }))
}

/// DELETE /api/v1/candidates
pub async fn handle_clear(State(state): State<AppState>) -> Json<LoadedResponse> {
    state.working_set.replace(Vec::new()).await;
    info!("Working set cleared");
    Json(LoadedResponse { loaded: 0 })
}

/// POST /api/v1/candidates/sample
pub async fn handle_load_sample(State(state): State<AppState>) -> Json<LoadedResponse> {
    let loaded = state.working_set.replace(sample_candidates()).await;
    info!(loaded, "Sample set loaded");
    Json(LoadedResponse { loaded })
}

/// POST /api/v1/candidates/upload
/// Multipart field `file`. JSON is decoded here, PDF goes to the configured
/// document importer.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<LoadedResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let kind = UploadKind::from_file_name(&file_name)
            .ok_or_else(|| AppError::Validation("Only .json or .pdf supported".to_string()))?;
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        let candidates = match kind {
            UploadKind::Json => parse_candidates(&content)?,
            UploadKind::Pdf => state.importer.import(&file_name, content).await?,
        };

        let loaded = state.working_set.replace(candidates).await;
        info!(loaded, file = %file_name, ?kind, "Working set replaced from upload");
        return Ok(Json(LoadedResponse { loaded }));
    }

    Err(AppError::Validation("Missing multipart field 'file'".to_string()))
}
