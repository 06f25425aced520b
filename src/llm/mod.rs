//! Clients for the external model capabilities: embeddings on both the query
//! and ingest paths, summarization on the ingest path only.

pub mod embeddings;
pub mod summarize;
