//! Sentence-boundary text chunker.
//!
//! Splits document text into sentence-like units and greedily packs them
//! into chunks of roughly `target_size` characters. Units never split
//! mid-sentence, so a single oversized sentence still forms its own
//! (oversized) chunk rather than being truncated.

/// Split text into sentence-like units.
///
/// A unit ends after `.`, `!`, `?`, or `\n` when the next character is
/// whitespace; the delimiter stays attached to the preceding unit and the
/// whitespace run between units is consumed.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?' | '\n') {
            continue;
        }
        let followed_by_ws = matches!(chars.peek(), Some(&(_, next)) if next.is_whitespace());
        if !followed_by_ws {
            continue;
        }
        units.push(&text[start..i + c.len_utf8()]);
        while matches!(chars.peek(), Some(&(_, w)) if w.is_whitespace()) {
            chars.next();
        }
        start = chars.peek().map_or(text.len(), |&(j, _)| j);
    }

    if start < text.len() {
        units.push(&text[start..]);
    }
    units
}

/// Split `text` into trimmed chunks of at most `target_size` characters,
/// except where a single sentence alone exceeds the target.
///
/// The flush decision is made before appending the next unit, so every
/// multi-sentence chunk stays within `target_size`. Blank input yields an
/// empty vec. `target_size` must be positive.
pub fn chunk_text(text: &str, target_size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for unit in split_sentences(text) {
        if !current.is_empty() && current.len() + unit.len() > target_size {
            let flushed = current.trim();
            if !flushed.is_empty() {
                chunks.push(flushed.to_string());
            }
            current.clear();
        }
        current.push_str(unit);
        current.push(' ');
    }

    let last = current.trim();
    if !last.is_empty() {
        chunks.push(last.to_string());
    }
    chunks
}
