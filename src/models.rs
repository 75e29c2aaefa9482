//! Core data models for the knowledge base.
//!
//! These types represent the documents, chunks, and search results that flow
//! through the ingestion and retrieval pipeline. Persisted types serialize
//! with camelCase field names so the flat JSON lists already managed by the
//! application load unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded knowledge-base document.
///
/// Owns 1..N chunks; deleting a document cascade-deletes its chunks
/// (see [`Store::delete_document`](crate::store::Store::delete_document)).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub chunk_count: usize,
    pub uploaded_at: DateTime<Utc>,
    /// Source text size in bytes.
    pub size: u64,
    /// SHA-256 of the source text, used to skip re-ingesting unchanged content.
    #[serde(default)]
    pub dedup_hash: String,
}

/// A bounded-length piece of a document, stored with its precomputed
/// token list.
///
/// `tokens` is computed once at ingest and treated as immutable thereafter;
/// re-tokenizing is a full re-ingest, not an update. `index` is the chunk's
/// 0-based position within its parent document, sequential with no gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    pub id: String,
    pub document_id: String,
    pub content: String,
    pub tokens: Vec<String>,
    pub index: i64,
}

/// A chunk scored against a query. Ephemeral, produced per search call and
/// never stored.
#[derive(Debug, Clone)]
pub struct ScoredResult {
    pub chunk: Chunk,
    pub score: f64,
}

/// A search result enriched with parent-document metadata, ready for the
/// application to display. Scores carry full `f64` precision; any display
/// rounding is the caller's concern.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub content: String,
    pub score: f64,
    pub document_id: String,
    pub document_name: String,
    pub document_category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_wire_format_is_camel_case() {
        let chunk = Chunk {
            id: "c1".to_string(),
            document_id: "d1".to_string(),
            content: "Fish swim.".to_string(),
            tokens: vec!["fish".to_string(), "swim".to_string()],
            index: 0,
        };
        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(json["documentId"], "d1");
        assert_eq!(json["index"], 0);
        assert!(json.get("document_id").is_none());
    }

    #[test]
    fn test_chunk_loads_existing_records() {
        // Shape of the records the application already persists.
        let json = r#"{
            "id": "mf1k2x9abc123",
            "documentId": "mf1k2x8def456",
            "content": "Cats are great.",
            "tokens": ["cats", "great"],
            "index": 0
        }"#;
        let chunk: Chunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.document_id, "mf1k2x8def456");
        assert_eq!(chunk.tokens, vec!["cats", "great"]);
    }

    #[test]
    fn test_document_dedup_hash_defaults_for_old_records() {
        let json = r#"{
            "id": "d1",
            "name": "notes.txt",
            "category": "other",
            "chunkCount": 2,
            "uploadedAt": "2026-08-07T12:00:00Z",
            "size": 120
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert!(doc.dedup_hash.is_empty());
        assert!(doc.tags.is_empty());
    }
}
