use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::engine::feedback::{feedback, FeedbackOutcome};
use crate::error::EngineError;
use crate::models::{FeedbackRequest, FeedbackResponse};
use crate::state::AppState;

/// POST /feedback - Route a helpfulness signal.
///
/// `helpful` (the default when absent) is acknowledged and nothing else
/// happens. `helpful: false` ingests the issue into the corpus; the response
/// stays 200 either way, but a failed ingest reports
/// `{"status": "ingest_failed"}` so callers can observe it.
pub async fn handle(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, (StatusCode, String)> {
    if req.helpful {
        return Ok(Json(FeedbackResponse { status: "ok" }));
    }

    let (title, description) =
        require_fields(&req).map_err(|e| (e.status_code(), e.to_string()))?;

    let status = match feedback(&state, false, title, description).await {
        FeedbackOutcome::Acknowledged | FeedbackOutcome::Ingested { .. } => "ok",
        FeedbackOutcome::IngestFailed => "ingest_failed",
    };

    Ok(Json(FeedbackResponse { status }))
}

/// Ingestion requires both fields present; empty strings are fine, absent
/// fields are not. Rejected before any external call.
fn require_fields(req: &FeedbackRequest) -> Result<(&str, &str), EngineError> {
    match (req.title.as_deref(), req.description.as_deref()) {
        (Some(title), Some(description)) => Ok((title, description)),
        _ => Err(EngineError::Validation(
            "title and description are required when helpful is false".to_string(),
        )),
    }
}
