use super::chunk::{ContentChunk, SegmentItem};
use crate::markup::Element;

/// Splits a document at its heading elements, lifting images onto slides of
/// their own.
///
/// Content ahead of the first heading has no chunk to land in and is
/// discarded. The trailing open chunk IS sealed at end of input, so the
/// content under the final heading survives.
pub fn split_by_headings(elements: &[Element]) -> Vec<SegmentItem> {
    let mut sealed: Vec<SegmentItem> = Vec::new();
    let mut open: Option<ContentChunk> = None;

    for element in elements {
        if element.heading_level().is_some() {
            seal(&mut sealed, open.take());

            let text = element.text.trim();
            let title = (!text.is_empty()).then(|| text.to_string());
            open = Some(ContentChunk::titled(title));
        } else if let Some(mut chunk) = open.take() {
            if element.tag == "img" {
                seal(&mut sealed, Some(chunk));
                sealed.push(SegmentItem::Image {
                    src: element.attr("src").unwrap_or_default().to_string(),
                    alt: element
                        .attr("alt")
                        .map(str::trim)
                        .filter(|alt| !alt.is_empty())
                        .map(str::to_string),
                });
                // keep collecting whatever trails the image
                open = Some(ContentChunk::default());
            } else {
                chunk.push_element(element);
                open = Some(chunk);
            }
        }
    }

    seal(&mut sealed, open);
    sealed
}

// Chunks with no body are dropped, titled or not.
fn seal(sealed: &mut Vec<SegmentItem>, chunk: Option<ContentChunk>) {
    if let Some(chunk) = chunk {
        if !chunk.is_empty() {
            sealed.push(SegmentItem::Chunk(chunk));
        }
    }
}
