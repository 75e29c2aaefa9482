//! Whitespace tokenizer with stop-word removal.
//!
//! Lower-cases the input, replaces every character outside `[a-z0-9]` and
//! whitespace with a space, splits on whitespace runs, and drops
//! single-character tokens and common English function words. Accented and
//! non-Latin characters are stripped rather than preserved; this is a
//! deliberate simplification, not Unicode-aware NLP.
//!
//! Order and duplicates are preserved: term frequency is recovered later by
//! counting, not here.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English function words excluded from indexing and search.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "is", "it", "as", "was", "are", "be", "has", "had", "do", "does", "this", "that",
        "these", "those", "i", "you", "he", "she", "we", "they", "my", "your", "his", "her", "its",
        "our", "their", "what", "which", "who", "whom", "how", "when", "where", "why", "not", "no",
        "all", "each", "every", "both", "few", "more", "most", "other", "some", "such", "than",
        "too", "very", "can", "will", "just", "should", "now",
    ]
    .into_iter()
    .collect()
});

/// Tokenize text into normalized search terms.
///
/// Empty input yields an empty vec rather than an error.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .filter(|w| w.len() > 1 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}
