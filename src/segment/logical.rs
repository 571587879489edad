use std::mem;

use anyhow::Result;

use super::chunk::ContentChunk;
use super::subchunk::split_oversized;
use super::SegmentationConfig;
use crate::markup::{Element, MarkupParser};

// Soft break thresholds, measured against the words accumulated BEFORE the
// triggering element.
const PARAGRAPH_BREAK_WORDS: usize = 80;
const LIST_BREAK_WORDS: usize = 60;

// Seals a chunk outright once it grows past this, whatever the element mix.
const CHUNK_CAP_WORDS: usize = 200;

// Chunks past this are re-split down to `max_words_per_slide`.
const OVERSIZE_WORDS: usize = 150;

/// Chunks a document that has no usable heading structure, breaking on
/// structural elements and running word counts instead.
pub fn split_by_logic(
    elements: &[Element],
    config: &SegmentationConfig,
    parser: &dyn MarkupParser,
) -> Result<Vec<ContentChunk>> {
    let mut sealed = Vec::new();
    let mut open = ContentChunk::default();

    for element in elements {
        if should_break(&open, element, config) && !open.is_empty() {
            sealed.push(mem::take(&mut open));
        }

        open.push_element(element);

        if open.word_count > CHUNK_CAP_WORDS {
            sealed.push(mem::take(&mut open));
        }
    }

    if !open.is_empty() {
        sealed.push(open);
    }

    let mut chunks = Vec::with_capacity(sealed.len());
    for chunk in sealed {
        if chunk.word_count > OVERSIZE_WORDS {
            chunks.extend(split_oversized(chunk, config.max_words_per_slide, parser)?);
        } else {
            chunks.push(chunk);
        }
    }

    Ok(chunks)
}

fn should_break(open: &ContentChunk, element: &Element, config: &SegmentationConfig) -> bool {
    let tag = element.tag.as_str();

    // a horizontal rule always ends the running chunk
    if tag == "hr" {
        return true;
    }

    if !config.break_tags.iter().any(|t| t == tag) {
        return false;
    }

    match tag {
        "blockquote" => true,
        "p" => open.word_count > PARAGRAPH_BREAK_WORDS,
        "ul" | "ol" => open.word_count > LIST_BREAK_WORDS,
        _ => false,
    }
}
