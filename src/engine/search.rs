use crate::engine::normalize;
use crate::error::EngineError;
use crate::llm::embeddings;
use crate::models::SearchResult;
use crate::state::AppState;

/// Number of nearest neighbours requested per query.
pub const TOP_K: usize = 5;

/// Duplicate search: embed the query text and return the closest stored
/// issues, ordered ascending by cosine distance.
///
/// Read-only; returns at most [`TOP_K`] results, fewer when the corpus is
/// smaller, and an empty list for an empty corpus. An empty title and
/// description is a legal degenerate query. Collaborator failures surface as
/// [`EngineError::Dependency`] with no internal retry — retry policy belongs
/// to the caller.
pub async fn search(
    state: &AppState,
    title: &str,
    description: &str,
) -> Result<Vec<SearchResult>, EngineError> {
    let query = normalize::query_text(title, description);

    let embedding = embeddings::embed_single(&state.http_client, &state.config.llm, &query)
        .await
        .map_err(EngineError::Dependency)?;

    let results = state
        .corpus
        .query(&embedding, TOP_K)
        .map_err(EngineError::Dependency)?;

    tracing::debug!(
        "Search returned {} of {} corpus records",
        results.len(),
        state.corpus.len()
    );

    Ok(results)
}
