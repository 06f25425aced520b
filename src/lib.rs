//! # dupe-detect
//!
//! A Rust web service for semantic duplicate-issue detection. A newly
//! reported problem (title + description) is embedded and matched against a
//! corpus of previously recorded issues; the closest matches are returned
//! ranked by cosine distance so the reporter can be shown existing answers
//! before filing a duplicate. When the reporter says none of the suggestions
//! helped, the new issue is summarized, embedded, and folded into the corpus
//! so future searches can match against it.
//!
//! ## Architecture
//!
//! ```text
//!   POST /search                          POST /feedback
//!        │                                     │
//!        ▼                                     ▼
//! ┌──────────────┐                    ┌─────────────────┐
//! │ query text:  │                    │ helpful == true │──▶ ack only
//! │ title ␣ desc │                    │ helpful == false│
//! └──────┬───────┘                    └────────┬────────┘
//!        │                                     ▼
//!        ▼                            ┌─────────────────┐
//! ┌──────────────┐                    │ ingest text:    │
//! │  Embedding   │                    │ title ++ desc   │
//! │  Capability  │                    └────────┬────────┘
//! └──────┬───────┘                             ▼
//!        │                            ┌─────────────────┐
//!        ▼                            │  Summarization  │
//! ┌──────────────┐                    │  (≤5 sentences) │
//! │ Corpus query │                    └────────┬────────┘
//! │ top 5 cosine │                             ▼
//! └──────┬───────┘                    ┌─────────────────┐
//!        │                            │ embed(summary)  │
//!        ▼                            └────────┬────────┘
//!  ranked results                              ▼
//!  (ascending distance)               ┌─────────────────┐
//!                                     │  atomic insert  │
//!                                     └─────────────────┘
//! ```
//!
//! The query path embeds the raw title+description; the ingest path embeds
//! the generated summary. The asymmetry is deliberate: summarization cost is
//! paid once at ingest time, not on every query.
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for server, data dir, and LLM settings
//! - [`models`] - Shared data types: `IssueRecord`, `SearchResult`, request/response types
//! - [`error`] - `EngineError`: validation vs dependency failures
//! - [`corpus`] - The similarity index: persisted issue records with embeddings, cosine top-k
//! - [`llm::embeddings`] - Embedding generation via Ollama or OpenAI-compatible APIs
//! - [`llm::summarize`] - Issue summarization via the chat model (ingest path only)
//! - [`engine`] - The orchestrators: search, ingest, and feedback routing
//! - [`api`] - Axum HTTP handlers for `/search` and `/feedback`
//! - [`state`] - Shared application state holding the corpus, HTTP client, and config

pub mod api;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod llm;
pub mod models;
pub mod state;
