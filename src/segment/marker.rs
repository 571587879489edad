use anyhow::Result;
use regex::Regex;

use super::chunk::{word_count, ContentChunk};
use super::title;
use crate::markup::MarkupParser;

// The three author-facing break tokens, matched case-insensitively.
const MARKER_PATTERN: &str = r"(?i)---SLIDE---|<!-- SLIDE -->|\[SLIDE\]";
const MARKER_DELIM: &str = "%%SLIDE-BREAK%%";

pub fn contains_marker(content: &str) -> bool {
    Regex::new(MARKER_PATTERN).unwrap().is_match(content)
}

/// Splits raw content on author-inserted break tokens. Fragments that are
/// empty after trimming are dropped; survivors are titled by extraction,
/// falling back to `"Slide {n}"` numbered over the survivors.
pub fn split_on_markers(content: &str, parser: &dyn MarkupParser) -> Result<Vec<ContentChunk>> {
    let regex = Regex::new(MARKER_PATTERN).unwrap();
    let normalized = regex.replace_all(content, MARKER_DELIM);

    let mut chunks = Vec::new();
    for piece in normalized.split(MARKER_DELIM) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }

        let fragment = parser.parse(piece)?;
        let chunk_title = title::derive_title(&fragment.elements)
            .unwrap_or_else(|| format!("Slide {}", chunks.len() + 1));

        chunks.push(ContentChunk {
            markup: piece.to_string(),
            title: Some(chunk_title),
            word_count: word_count(&fragment.text),
        });
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::HtmlParser;

    #[test]
    fn detects_all_marker_forms_case_insensitively() {
        assert!(contains_marker("a ---SLIDE--- b"));
        assert!(contains_marker("a ---slide--- b"));
        assert!(contains_marker("a <!-- SLIDE --> b"));
        assert!(contains_marker("a <!-- slide --> b"));
        assert!(contains_marker("a [SLIDE] b"));
        assert!(contains_marker("a [slide] b"));
        assert!(!contains_marker("a --- SLIDE --- b"));
    }

    #[test]
    fn splits_on_mixed_marker_forms_in_order() {
        let content = "<p>one</p>---SLIDE---<p>two</p><!-- SLIDE --><p>three</p>[slide]<p>four</p>";
        let chunks = split_on_markers(content, &HtmlParser::new()).unwrap();

        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0].markup, "<p>one</p>");
        assert_eq!(chunks[1].markup, "<p>two</p>");
        assert_eq!(chunks[2].markup, "<p>three</p>");
        assert_eq!(chunks[3].markup, "<p>four</p>");
    }

    #[test]
    fn empty_fragments_between_markers_are_dropped() {
        let chunks = split_on_markers("A---SLIDE------SLIDE---B", &HtmlParser::new()).unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].markup, "A");
        assert_eq!(chunks[1].markup, "B");
    }

    #[test]
    fn fallback_titles_number_only_survivors() {
        let chunks = split_on_markers("A[SLIDE][SLIDE]B", &HtmlParser::new()).unwrap();

        assert_eq!(chunks[0].title.as_deref(), Some("Slide 1"));
        assert_eq!(chunks[1].title.as_deref(), Some("Slide 2"));
    }

    #[test]
    fn extraction_wins_over_fallback_title() {
        let content = "<h2>First</h2><p>x</p>---SLIDE---plain tail";
        let chunks = split_on_markers(content, &HtmlParser::new()).unwrap();

        assert_eq!(chunks[0].title.as_deref(), Some("First"));
        assert_eq!(chunks[1].title.as_deref(), Some("Slide 2"));
    }

    #[test]
    fn no_markers_yield_the_whole_content() {
        let chunks = split_on_markers("  <p>alone</p>  ", &HtmlParser::new()).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].markup, "<p>alone</p>");
        assert_eq!(chunks[0].word_count, 1);
    }

    #[test]
    fn all_empty_content_yields_nothing() {
        assert!(split_on_markers("  ---SLIDE---  ", &HtmlParser::new())
            .unwrap()
            .is_empty());
    }
}
