//! Sentence-aware greedy chunk packing
//!
//! The synthesis engine takes bounded text per call, so long-form input is
//! packed into chunks: whole sentences first, and when a single sentence is
//! longer than the bound, its words (commas kept attached) are packed with
//! the same size rule.

use tracing::debug;

/// One bounded-size slice of the input text, synthesized independently.
///
/// Chunks are ordered by `index` (creation order) and are never merged or
/// reordered after creation. Content is always non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    /// Zero-based position within the request.
    pub index: usize,
    pub content: String,
}

impl TextChunk {
    /// Character count of the chunk content.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

/// Collapse all whitespace runs (including newlines) to single spaces and trim.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Segment `text` into ordered chunks of fewer than `max_chars` characters.
///
/// Sentences are packed greedily; a sentence longer than the bound is packed
/// word by word, trimming a trailing comma from each flushed chunk. Only an
/// irreducible single token may overflow the bound.
///
/// Returns an empty vector when normalization yields an empty string; the
/// caller must treat that as a validation error. `max_chars` sanity checking
/// is likewise the caller's job — a bound of zero degenerates to one token
/// per chunk but never loops.
pub fn segment(text: &str, max_chars: usize) -> Vec<TextChunk> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut chunks: Vec<String> = Vec::new();
    let mut buf = String::new();

    for sentence in split_sentences(&normalized) {
        let sentence_len = sentence.chars().count();

        if sentence_len > max_chars {
            // Cannot be packed whole: flush what we have, then pack tokens.
            flush(&mut buf, &mut chunks);
            pack_oversized(sentence, max_chars, &mut chunks);
            continue;
        }

        if buf.is_empty() {
            buf.push_str(sentence);
        } else if buf.chars().count() + 1 + sentence_len < max_chars {
            buf.push(' ');
            buf.push_str(sentence);
        } else {
            flush(&mut buf, &mut chunks);
            buf.push_str(sentence);
        }
    }
    flush(&mut buf, &mut chunks);

    debug!(
        chunks = chunks.len(),
        input_chars = normalized.chars().count(),
        max_chars,
        "text segmented"
    );

    chunks
        .into_iter()
        .enumerate()
        .map(|(index, content)| TextChunk { index, content })
        .collect()
}

/// Split normalized text into maximal sentence runs.
///
/// A sentence ends immediately after `.`, `!` or `?` followed by whitespace
/// (a single space after normalization). A trailing unterminated run counts
/// as a sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(_, next)) = chars.peek() {
                if next == ' ' {
                    let end = i + c.len_utf8();
                    sentences.push(&text[start..end]);
                    chars.next(); // consume the separating space
                    start = end + 1;
                }
            }
        }
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// Pack a sentence longer than the bound, token by token.
///
/// Commas stay attached to their preceding word; a trailing comma is trimmed
/// from the end of each flushed chunk. A single token longer than the bound
/// is irreducible and emitted as its own (overflowing) chunk.
fn pack_oversized(sentence: &str, max_chars: usize, chunks: &mut Vec<String>) {
    let mut buf = String::new();
    for word in sentence.split(' ') {
        let word_len = word.chars().count();
        if buf.is_empty() {
            buf.push_str(word);
        } else if buf.chars().count() + 1 + word_len < max_chars {
            buf.push(' ');
            buf.push_str(word);
        } else {
            flush_clause(&mut buf, chunks);
            buf.push_str(word);
        }
    }
    flush_clause(&mut buf, chunks);
}

fn flush(buf: &mut String, chunks: &mut Vec<String>) {
    let content = buf.trim();
    if !content.is_empty() {
        chunks.push(content.to_string());
    }
    buf.clear();
}

fn flush_clause(buf: &mut String, chunks: &mut Vec<String>) {
    let content = buf.trim_end().trim_end_matches(',').trim_end();
    if !content.is_empty() {
        chunks.push(content.to_string());
    }
    buf.clear();
}
