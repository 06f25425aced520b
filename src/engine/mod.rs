//! The duplicate-detection orchestration engine.
//!
//! [`search`] drives embed-query → corpus top-k; [`ingest`] drives
//! summarize → embed → atomic insert; [`feedback`] routes a helpfulness
//! signal to ingestion or a plain acknowledgment. [`normalize`] holds the
//! two canonicalization rules feeding those paths.

pub mod feedback;
pub mod ingest;
pub mod normalize;
pub mod search;
