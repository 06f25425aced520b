use crate::engine::ingest;
use crate::state::AppState;

/// Terminal outcome of one feedback signal. No state is retained across
/// requests.
#[derive(Debug)]
pub enum FeedbackOutcome {
    /// The suggestions helped; nothing was ingested.
    Acknowledged,
    /// The suggestions did not help and the issue joined the corpus.
    Ingested { id: i64 },
    /// Ingestion was attempted and failed; the corpus is unchanged. The
    /// signal is still acknowledged, but callers can observe the failure.
    IngestFailed,
}

/// Route a helpfulness signal: `helpful` acknowledges and does nothing else;
/// not-helpful triggers exactly one ingestion of the reported issue.
pub async fn feedback(
    state: &AppState,
    helpful: bool,
    title: &str,
    description: &str,
) -> FeedbackOutcome {
    if helpful {
        return FeedbackOutcome::Acknowledged;
    }

    match ingest::ingest(state, title, description).await {
        Ok(id) => FeedbackOutcome::Ingested { id },
        Err(e) => {
            tracing::warn!("Ingestion from not-helpful feedback failed: {e}");
            FeedbackOutcome::IngestFailed
        }
    }
}
