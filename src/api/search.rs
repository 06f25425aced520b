use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::engine;
use crate::models::{SearchRequest, SearchResult};
use crate::state::AppState;

/// POST /search - Top 5 duplicate candidates for a reported issue, ranked
/// ascending by cosine distance.
///
/// An empty array means the corpus had nothing close (or is empty); a failed
/// search returns an error status instead, so the two are distinguishable.
pub async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<Vec<SearchResult>>, (StatusCode, String)> {
    match engine::search::search(&state, &req.title, &req.description).await {
        Ok(results) => Ok(Json(results)),
        Err(e) => {
            tracing::error!("Search failed: {e}");
            Err((e.status_code(), e.to_string()))
        }
    }
}
