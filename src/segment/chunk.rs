use crate::markup::Element;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Pre-slide grouping of source markup. Produced by a splitter, possibly
/// re-split on size, consumed when the orchestrator turns it into a slide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentChunk {
    pub markup: String,
    pub title: Option<String>,
    pub word_count: usize,
}

impl ContentChunk {
    pub fn titled(title: Option<String>) -> Self {
        Self {
            title,
            ..Self::default()
        }
    }

    pub fn push_element(&mut self, element: &Element) {
        if !self.markup.is_empty() {
            self.markup.push('\n');
        }
        self.markup.push_str(&element.html);
        self.word_count += element.word_count();
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }
}

/// One entry of a splitter's output: either a chunk still to be turned into
/// a content slide, or an image lifted onto a slide of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentItem {
    Chunk(ContentChunk),
    Image { src: String, alt: Option<String> },
}

impl SegmentItem {
    pub fn title(&self) -> Option<String> {
        match self {
            SegmentItem::Chunk(chunk) => chunk.title.clone(),
            SegmentItem::Image { alt, .. } => alt.clone(),
        }
    }

    pub fn markup(&self) -> String {
        match self {
            SegmentItem::Chunk(chunk) => chunk.markup.clone(),
            SegmentItem::Image { src, alt } => match alt {
                Some(alt) => format!("<img src=\"{}\" alt=\"{}\">", src, alt),
                None => format!("<img src=\"{}\">", src),
            },
        }
    }

    pub fn words(&self) -> usize {
        match self {
            SegmentItem::Chunk(chunk) => chunk.word_count,
            SegmentItem::Image { .. } => 0,
        }
    }
}
