use chrono::Utc;
use uuid::Uuid;

use crate::engine::normalize;
use crate::error::EngineError;
use crate::llm::{embeddings, summarize};
use crate::models::IssueRecord;
use crate::state::AppState;

/// Fold a reported issue into the corpus: summarize, embed the summary, and
/// insert the complete record as one atomic unit. Returns the new record id.
///
/// Steps are strictly sequential since each depends on the previous step's
/// output; any failing step aborts the whole ingestion and leaves no partial
/// record visible to search. There is no automatic retry, and because id
/// generation is independent of content, a caller that retries after a
/// failure mints a new id — near-identical records from repeated feedback on
/// the same issue are an accepted trade-off, not deduplicated here.
pub async fn ingest(
    state: &AppState,
    title: &str,
    description: &str,
) -> Result<i64, EngineError> {
    let id = generate_id();

    let text = normalize::ingest_text(title, description);

    let summary = summarize::summarize(&state.http_client, &state.config.llm, &text)
        .await
        .map_err(EngineError::Dependency)?;

    // The embedding comes from the summary, not the raw report, so future
    // queries match against the condensed technical content.
    let embedding = embeddings::embed_single(&state.http_client, &state.config.llm, &summary)
        .await
        .map_err(EngineError::Dependency)?;

    let record = IssueRecord {
        id,
        title: title.to_string(),
        question_body: description.to_string(),
        answer_body: None,
        summary: Some(summary),
        created_at: Utc::now(),
    };

    state
        .corpus
        .insert(record, embedding)
        .map_err(EngineError::Dependency)?;

    tracing::info!("Ingested issue {id} into corpus");
    Ok(id)
}

/// New record id from a v4 UUID's leading bytes, masked to 63 bits so ids
/// stay positive. High-entropy rather than a counter: concurrent ingestions
/// need no coordination to avoid collisions.
fn generate_id() -> i64 {
    let uuid = Uuid::new_v4();
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&uuid.as_bytes()[..8]);
    (u64::from_le_bytes(raw) & i64::MAX as u64) as i64
}
