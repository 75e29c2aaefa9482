//! Storage abstraction for the knowledge base.
//!
//! The [`Store`] trait defines the operations the ingestion and retrieval
//! pipeline needs, enabling pluggable backends. The application's JSON-file
//! persistence lives behind this seam; [`memory::InMemoryStore`] is the
//! bundled implementation.
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::models::{Chunk, Document};

/// Full document response: metadata plus its chunks in index order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    #[serde(flatten)]
    pub document: Document,
    pub chunks: Vec<Chunk>,
}

/// Abstract storage backend for documents and their chunks.
///
/// All operations are async (via `async-trait`); in-memory implementations
/// return immediately-ready futures.
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`upsert_document`](Store::upsert_document) | Insert or update a document |
/// | [`replace_chunks`](Store::replace_chunks) | Replace all chunks for a document |
/// | [`get_document`](Store::get_document) | Retrieve a document with its chunks |
/// | [`list_documents`](Store::list_documents) | List all documents |
/// | [`find_by_hash`](Store::find_by_hash) | Look up a document by content hash |
/// | [`delete_document`](Store::delete_document) | Delete a document and its chunks |
/// | [`all_chunks`](Store::all_chunks) | The flat chunk list the ranker consumes |
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert or update a document. Returns the document ID.
    async fn upsert_document(&self, doc: &Document) -> Result<String>;

    /// Replace all chunks for a document.
    ///
    /// Chunks with empty content are never stored.
    async fn replace_chunks(&self, doc_id: &str, chunks: &[Chunk]) -> Result<()>;

    /// Retrieve a document with its chunks sorted by index.
    async fn get_document(&self, id: &str) -> Result<Option<DocumentResponse>>;

    /// List all documents, oldest upload first.
    async fn list_documents(&self) -> Result<Vec<Document>>;

    /// Find a document whose `dedup_hash` matches `hash`.
    async fn find_by_hash(&self, hash: &str) -> Result<Option<Document>>;

    /// Delete a document and cascade-delete all of its chunks.
    ///
    /// Returns `false` if no such document existed.
    async fn delete_document(&self, id: &str) -> Result<bool>;

    /// Every stored chunk across all documents, the corpus the ranker
    /// scores at query time.
    async fn all_chunks(&self) -> Result<Vec<Chunk>>;
}
