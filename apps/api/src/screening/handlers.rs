use axum::{extract::State, response::Html, Json};
use serde::Serialize;
use tracing::info;

use crate::models::candidate::ScoredCandidate;
use crate::render::{render_print_document, PrintEntry};
use crate::screening::pipeline::{self, ScreeningOutcome, ScreeningRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub candidates: Vec<ScoredCandidate>,
}

/// POST /api/v1/screen
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(req): Json<ScreeningRequest>,
) -> Json<ScreeningOutcome> {
    let candidates = state.working_set.snapshot().await;
    Json(pipeline::run(&candidates, &req))
}

/// POST /api/v1/screen/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(req): Json<ScreeningRequest>,
) -> Json<CompareResponse> {
    let candidates = state.working_set.snapshot().await;
    let outcome = pipeline::run(&candidates, &req);
    Json(CompareResponse {
        candidates: pipeline::select_for_compare(outcome.ranked, &req.selected),
    })
}

/// POST /api/v1/screen/print
/// Returns a standalone HTML document; printing it is left to the client.
pub async fn handle_print(
    State(state): State<AppState>,
    Json(req): Json<ScreeningRequest>,
) -> Html<String> {
    let candidates = state.working_set.snapshot().await;
    let outcome = pipeline::run(&candidates, &req);
    let chosen = pipeline::select_for_print(outcome.ranked, &req.selected);

    let entries: Vec<PrintEntry> = chosen.iter().map(PrintEntry::from).collect();
    info!(printed = entries.len(), "Print document rendered");
    Html(render_print_document(&entries))
}
