use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{IssueRecord, SearchResult};

/// A stored record together with its embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CorpusEntry {
    record: IssueRecord,
    embedding: Vec<f32>,
}

/// The similarity index: issue records plus their embeddings, held in memory
/// with disk persistence and cosine-distance search.
///
/// A record becomes visible to [`query`](Corpus::query) only through a single
/// [`insert`](Corpus::insert) covering the whole record and its embedding;
/// there is no partially written state to observe. Records are never updated
/// or deleted.
pub struct Corpus {
    entries: RwLock<Vec<CorpusEntry>>,
    persist_path: std::path::PathBuf,
}

impl Corpus {
    pub fn open_or_create(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let persist_path = data_dir.join("corpus.json");

        let entries = if persist_path.exists() {
            let data =
                std::fs::read_to_string(&persist_path).context("Failed to read corpus file")?;
            serde_json::from_str(&data).context("Failed to parse corpus file")?
        } else {
            Vec::new()
        };

        Ok(Self {
            entries: RwLock::new(entries),
            persist_path,
        })
    }

    /// Insert one record with its embedding as a single atomic unit.
    ///
    /// The embedding dimension must match every stored embedding; a mismatch
    /// is a hard failure, not a silent truncation. If persisting fails the
    /// in-memory entry is rolled back so a failed insert is never queryable.
    pub fn insert(&self, record: IssueRecord, embedding: Vec<f32>) -> Result<()> {
        let mut entries = self.entries.write();

        if let Some(existing) = entries.first() {
            if existing.embedding.len() != embedding.len() {
                anyhow::bail!(
                    "embedding dimension mismatch: corpus has {}, got {}",
                    existing.embedding.len(),
                    embedding.len()
                );
            }
        }

        entries.push(CorpusEntry { record, embedding });

        if let Err(e) = self.persist(&entries) {
            entries.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Search by cosine distance against a query embedding.
    ///
    /// Returns at most `k` results ordered ascending by distance (closest
    /// first, ties in stored order). An empty corpus yields an empty list.
    pub fn query(&self, query_embedding: &[f32], k: usize) -> Result<Vec<SearchResult>> {
        let entries = self.entries.read();

        if let Some(existing) = entries.first() {
            if existing.embedding.len() != query_embedding.len() {
                anyhow::bail!(
                    "embedding dimension mismatch: corpus has {}, query has {}",
                    existing.embedding.len(),
                    query_embedding.len()
                );
            }
        }

        let mut scored: Vec<(f32, &CorpusEntry)> = entries
            .iter()
            .map(|e| (cosine_distance(query_embedding, &e.embedding), e))
            .collect();

        // Ascending: smallest distance first
        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        Ok(scored
            .into_iter()
            .map(|(distance, e)| SearchResult {
                id: e.record.id,
                title: e.record.title.clone(),
                question_body: e.record.question_body.clone(),
                answer_body: e.record.answer_body.clone(),
                distance,
            })
            .collect())
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn contains_id(&self, id: i64) -> bool {
        self.entries.read().iter().any(|e| e.record.id == id)
    }

    /// Persist to disk via temp file + rename so the on-disk corpus is never
    /// half-written.
    fn persist(&self, entries: &[CorpusEntry]) -> Result<()> {
        let data = serde_json::to_string(entries)?;
        let tmp_path = self.persist_path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &data).context("Failed to write corpus temp file")?;
        std::fs::rename(&tmp_path, &self.persist_path).context("Failed to replace corpus file")?;
        Ok(())
    }
}

/// Cosine distance: `1 - cosine similarity`. Zero-magnitude vectors compare
/// at the maximum distance of 1.
fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    1.0 - cosine_similarity(a, b)
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for i in 0..a.len() {
        dot += a[i] * b[i];
        norm_a += a[i] * a[i];
        norm_b += b[i] * b[i];
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}
