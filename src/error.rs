use axum::http::StatusCode;

/// Failures surfaced by the orchestration engine.
///
/// `Validation` means the call was rejected before any external invocation;
/// `Dependency` means an external capability (embedding, summarization, or
/// the similarity index) was unreachable, rejected the request, or returned
/// malformed output. The engine never retries either internally.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("dependency failure: {0}")]
    Dependency(#[source] anyhow::Error),
}

impl EngineError {
    /// Map to an HTTP status for the thin API layer: a failed search must be
    /// distinguishable from an empty result list.
    pub fn status_code(&self) -> StatusCode {
        match self {
            EngineError::Validation(_) => StatusCode::BAD_REQUEST,
            EngineError::Dependency(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
