use std::collections::BTreeMap;

use scraper::{ElementRef, Html};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("markup fragment could not be parsed: {0}")]
    Malformed(String),
}

/// One element of a parsed markup fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,

    /// plain text content, concatenated across descendants
    pub text: String,

    /// serialized outer markup
    pub html: String,

    pub children: Vec<Element>,
}

impl Element {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn heading_level(&self) -> Option<usize> {
        match self.tag.as_str() {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// A parsed markup string: its top-level elements plus the plain text of the
/// whole fragment (including text that sits outside any element).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub elements: Vec<Element>,
    pub text: String,
}

/// Parsing capability the segmentation algorithms are written against.
///
/// Segmentation never inspects raw markup itself; it walks `Fragment` trees,
/// so tests can feed synthetic trees without an HTML engine.
pub trait MarkupParser {
    fn parse(&self, markup: &str) -> Result<Fragment, ParseError>;
}

/// `MarkupParser` backed by an HTML engine. Parsing is best-effort: malformed
/// input is recovered the way the engine recovers it, never rejected here.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupParser for HtmlParser {
    fn parse(&self, markup: &str) -> Result<Fragment, ParseError> {
        let document = Html::parse_fragment(markup);
        let root = document.root_element();

        Ok(Fragment {
            elements: root
                .children()
                .filter_map(ElementRef::wrap)
                .map(convert)
                .collect(),
            text: root.text().collect(),
        })
    }
}

fn convert(element: ElementRef) -> Element {
    Element {
        tag: element.value().name().to_string(),
        attrs: element
            .value()
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        text: element.text().collect(),
        html: element.html(),
        children: element
            .children()
            .filter_map(ElementRef::wrap)
            .map(convert)
            .collect(),
    }
}
