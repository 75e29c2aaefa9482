//! Document ingestion pipeline.
//!
//! Coordinates the flow from raw text to persisted records: chunking,
//! per-chunk tokenization, and document metadata assembly. The upload
//! surface (multipart parsing, file-type extraction) stays in the
//! application; this pipeline starts where extracted text ends.
//!
//! Re-ingesting content identical to an already-stored document is skipped
//! via a SHA-256 content hash.

use anyhow::{bail, Result};
use chrono::Utc;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::chunk::chunk_text;
use crate::models::{Chunk, Document};
use crate::store::Store;
use crate::tokenize::tokenize;

/// Inputs for a single document ingestion.
#[derive(Debug, Clone)]
pub struct IngestParams {
    /// Display name of the document.
    pub name: String,
    /// Document category; empty falls back to `"other"`.
    pub category: String,
    pub tags: Vec<String>,
    /// Extracted plain text to index.
    pub text: String,
    /// Chunk size target in characters, see
    /// [`ChunkingConfig`](crate::config::ChunkingConfig).
    pub target_size: usize,
}

/// Chunk, tokenize, and store a document. Returns the stored record.
///
/// Content whose hash matches an already-stored document is not re-ingested;
/// the existing record is returned instead. Blank text is an error: there is
/// nothing to index.
pub async fn ingest_document<S: Store>(store: &S, params: &IngestParams) -> Result<Document> {
    if params.text.trim().is_empty() {
        bail!("no content to ingest");
    }

    let dedup_hash = content_hash(&params.text);
    if let Some(existing) = store.find_by_hash(&dedup_hash).await? {
        return Ok(existing);
    }

    let doc_id = Uuid::new_v4().to_string();
    let chunks: Vec<Chunk> = chunk_text(&params.text, params.target_size)
        .into_iter()
        .enumerate()
        .map(|(i, content)| {
            let tokens = tokenize(&content);
            Chunk {
                id: Uuid::new_v4().to_string(),
                document_id: doc_id.clone(),
                content,
                tokens,
                index: i as i64,
            }
        })
        .collect();

    let category = if params.category.is_empty() {
        "other".to_string()
    } else {
        params.category.clone()
    };

    let doc = Document {
        id: doc_id.clone(),
        name: params.name.clone(),
        category,
        tags: params.tags.clone(),
        chunk_count: chunks.len(),
        uploaded_at: Utc::now(),
        size: params.text.len() as u64,
        dedup_hash,
    };

    store.upsert_document(&doc).await?;
    store.replace_chunks(&doc_id, &chunks).await?;
    Ok(doc)
}

/// SHA-256 of the raw document text, hex-encoded.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
