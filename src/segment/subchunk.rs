use std::mem;

use anyhow::Result;

use super::chunk::ContentChunk;
use crate::markup::MarkupParser;

/// Re-splits one oversized chunk by regrouping its elements under a word
/// bound. Markup is never torn inside an element, so a chunk that parses to
/// a single element comes back unchanged even when it exceeds the bound.
/// Sub-chunks come back untitled; titles are re-derived downstream.
pub fn split_oversized(
    chunk: ContentChunk,
    max_words: usize,
    parser: &dyn MarkupParser,
) -> Result<Vec<ContentChunk>> {
    let fragment = parser.parse(&chunk.markup)?;
    if fragment.elements.len() <= 1 {
        return Ok(vec![chunk]);
    }

    let mut sealed = Vec::new();
    let mut open = ContentChunk::default();

    for element in &fragment.elements {
        if !open.is_empty() && open.word_count + element.word_count() > max_words {
            sealed.push(mem::take(&mut open));
        }
        open.push_element(element);
    }

    if !open.is_empty() {
        sealed.push(open);
    }

    Ok(sealed)
}
