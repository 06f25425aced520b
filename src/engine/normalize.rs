//! Canonical text construction. The query path and the ingest path each have
//! their own rule; both produce the single text blob handed to a model, and
//! nothing else is ever embedded or summarized.

/// Canonical text for a search query: title and description space-joined.
/// This is embedded directly; queries are never summarized.
pub fn query_text(title: &str, description: &str) -> String {
    format!("{title} {description}")
}

/// Canonical text for ingestion: plain concatenation, handed to the
/// summarizer (whose instructions treat the leading sentence as the title).
pub fn ingest_text(title: &str, description: &str) -> String {
    format!("{title}{description}")
}
