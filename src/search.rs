//! Okapi BM25 ranking over pre-tokenized chunks.
//!
//! The ranker is a pure function over its inputs: no cached index, no
//! incremental state. Document frequencies and per-chunk term frequencies
//! are recomputed on every call, which keeps the implementation correct and
//! simple for the small in-memory corpora the knowledge base holds. Cost is
//! O(total tokens across the corpus) per call.
//!
//! [`search_knowledge_base`] is the store-facing wrapper: it runs the same
//! ranking over every stored chunk and enriches each hit with its parent
//! document's name and category.

use std::collections::{HashMap, HashSet};

use anyhow::Result;

use crate::models::{Chunk, ScoredResult, SearchHit};
use crate::store::Store;
use crate::tokenize::tokenize;

/// Term-frequency saturation parameter.
pub const K1: f64 = 1.5;
/// Document-length normalization parameter.
pub const B: f64 = 0.75;

/// Score `chunks` against `query` and return the top `limit` results,
/// descending by score.
///
/// Chunks sharing no terms with the query score zero and are dropped. Equal
/// scores keep their input order (the sort is stable). An empty query or an
/// empty corpus yields an empty vec; this function never fails.
pub fn search(query: &str, chunks: &[Chunk], limit: usize) -> Vec<ScoredResult> {
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() || chunks.is_empty() {
        return Vec::new();
    }

    let n = chunks.len() as f64;
    let total_tokens: usize = chunks.iter().map(|c| c.tokens.len()).sum();
    let mut avg_dl = total_tokens as f64 / n;
    if avg_dl == 0.0 {
        avg_dl = 1.0;
    }

    // df[term] = number of distinct chunks containing the term.
    let mut df: HashMap<&str, usize> = HashMap::new();
    for chunk in chunks {
        let unique: HashSet<&str> = chunk.tokens.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    let mut results: Vec<ScoredResult> = Vec::new();
    for chunk in chunks {
        let dl = chunk.tokens.len() as f64;
        let mut tf: HashMap<&str, usize> = HashMap::new();
        for token in &chunk.tokens {
            *tf.entry(token.as_str()).or_insert(0) += 1;
        }

        // Summed over the query's token sequence, so a repeated query term
        // contributes once per repetition.
        let mut score = 0.0;
        for qt in &query_tokens {
            let term_df = df.get(qt.as_str()).copied().unwrap_or(0) as f64;
            let idf = ((n - term_df + 0.5) / (term_df + 0.5) + 1.0).ln();
            let freq = tf.get(qt.as_str()).copied().unwrap_or(0) as f64;
            score += idf * (freq * (K1 + 1.0)) / (freq + K1 * (1.0 - B + B * dl / avg_dl));
        }

        if score > 0.0 {
            results.push(ScoredResult {
                chunk: chunk.clone(),
                score,
            });
        }
    }

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(limit);
    results
}

/// Rank every chunk in `store` against `query` and enrich each hit with its
/// parent document's name and category.
///
/// Hits whose parent document is missing render as `"Unknown"` / `"other"`
/// rather than failing the whole search.
pub async fn search_knowledge_base<S: Store>(
    store: &S,
    query: &str,
    limit: usize,
) -> Result<Vec<SearchHit>> {
    let chunks = store.all_chunks().await?;
    let docs = store.list_documents().await?;
    let by_id: HashMap<&str, &crate::models::Document> =
        docs.iter().map(|d| (d.id.as_str(), d)).collect();

    let hits = search(query, &chunks, limit)
        .into_iter()
        .map(|ScoredResult { chunk, score }| {
            let doc = by_id.get(chunk.document_id.as_str()).copied();
            SearchHit {
                content: chunk.content,
                score,
                document_id: chunk.document_id,
                document_name: doc
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                document_category: doc
                    .map(|d| d.category.clone())
                    .unwrap_or_else(|| "other".to_string()),
            }
        })
        .collect();

    Ok(hits)
}
