//! In-memory [`Store`] implementation.
//!
//! Uses `HashMap` and `Vec` behind `std::sync::RwLock` for thread safety.
//! Suitable for tests and for applications that load their flat JSON
//! document/chunk lists into memory at startup and write them back on
//! mutation.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Chunk, Document};

use super::{DocumentResponse, Store};

/// In-memory store over RwLock-protected document and chunk tables.
pub struct InMemoryStore {
    docs: RwLock<HashMap<String, Document>>,
    chunks: RwLock<Vec<Chunk>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(HashMap::new()),
            chunks: RwLock::new(Vec::new()),
        }
    }

    /// Seed the store from previously persisted flat lists.
    pub fn from_records(docs: Vec<Document>, chunks: Vec<Chunk>) -> Self {
        let store = Self::new();
        {
            let mut doc_map = store.docs.write().unwrap();
            for doc in docs {
                doc_map.insert(doc.id.clone(), doc);
            }
            let mut chunk_list = store.chunks.write().unwrap();
            chunk_list.extend(chunks.into_iter().filter(|c| !c.content.is_empty()));
        }
        store
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn upsert_document(&self, doc: &Document) -> Result<String> {
        let mut docs = self.docs.write().unwrap();
        docs.insert(doc.id.clone(), doc.clone());
        Ok(doc.id.clone())
    }

    async fn replace_chunks(&self, doc_id: &str, chunks: &[Chunk]) -> Result<()> {
        let mut stored = self.chunks.write().unwrap();
        stored.retain(|c| c.document_id != doc_id);
        stored.extend(chunks.iter().filter(|c| !c.content.is_empty()).cloned());
        Ok(())
    }

    async fn get_document(&self, id: &str) -> Result<Option<DocumentResponse>> {
        let docs = self.docs.read().unwrap();
        let doc = match docs.get(id) {
            Some(doc) => doc.clone(),
            None => return Ok(None),
        };
        let chunks_guard = self.chunks.read().unwrap();
        let mut chunks: Vec<Chunk> = chunks_guard
            .iter()
            .filter(|c| c.document_id == id)
            .cloned()
            .collect();
        chunks.sort_by_key(|c| c.index);

        Ok(Some(DocumentResponse {
            document: doc,
            chunks,
        }))
    }

    async fn list_documents(&self) -> Result<Vec<Document>> {
        let docs = self.docs.read().unwrap();
        let mut all: Vec<Document> = docs.values().cloned().collect();
        all.sort_by(|a, b| a.uploaded_at.cmp(&b.uploaded_at).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn find_by_hash(&self, hash: &str) -> Result<Option<Document>> {
        if hash.is_empty() {
            return Ok(None);
        }
        let docs = self.docs.read().unwrap();
        Ok(docs.values().find(|d| d.dedup_hash == hash).cloned())
    }

    async fn delete_document(&self, id: &str) -> Result<bool> {
        let existed = {
            let mut docs = self.docs.write().unwrap();
            docs.remove(id).is_some()
        };
        let mut chunks = self.chunks.write().unwrap();
        chunks.retain(|c| c.document_id != id);
        Ok(existed)
    }

    async fn all_chunks(&self) -> Result<Vec<Chunk>> {
        let chunks = self.chunks.read().unwrap();
        Ok(chunks.clone())
    }
}
