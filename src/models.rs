use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded issue, the unit stored in the corpus.
///
/// Freshly ingested records carry the raw description in `question_body`,
/// no accepted answer, and a generated `summary` that the embedding was
/// derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Unique, generated at insertion time, never reused.
    pub id: i64,
    pub title: String,
    pub question_body: String,
    pub answer_body: Option<String>,
    /// Condensed digest produced at ingest time; the embedding source text.
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A single ranked match, transient and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: i64,
    pub title: String,
    #[serde(rename = "clean_question_body")]
    pub question_body: String,
    #[serde(rename = "clean_answer_body")]
    pub answer_body: Option<String>,
    /// Cosine distance to the query embedding; smaller = more similar.
    pub distance: f32,
}

/// Search request
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Feedback request
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    /// Absent means the suggestions helped; only `false` triggers ingestion.
    #[serde(default = "default_true")]
    pub helpful: bool,
    pub title: Option<String>,
    pub description: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Feedback response
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_fields_default_to_empty() {
        let req: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.title, "");
        assert_eq!(req.description, "");
    }

    #[test]
    fn test_feedback_helpful_defaults_to_true() {
        let req: FeedbackRequest = serde_json::from_str(r#"{"title": "t"}"#).unwrap();
        assert!(req.helpful);
        assert_eq!(req.description, None);
    }

    #[test]
    fn test_search_result_uses_clean_wire_names() {
        let result = SearchResult {
            id: 7,
            title: "App crashes on launch".to_string(),
            question_body: "null pointer in init".to_string(),
            answer_body: None,
            distance: 0.12,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("clean_question_body").is_some());
        assert!(json.get("clean_answer_body").is_some());
        assert!(json.get("question_body").is_none());
    }
}
