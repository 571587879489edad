use anyhow::Result;

use crate::markup::{Element, MarkupParser};

/// Last-resort title for chunks nothing could be extracted from.
pub const DEFAULT_TITLE: &str = "Content Slide";

const TITLE_MAX_CHARS: usize = 50;

/// Derives a display title from a content fragment: the first heading wins,
/// then the first bold run, then the lead of the first paragraph.
pub fn derive_title(elements: &[Element]) -> Option<String> {
    if let Some(heading) = find_text(elements, |el| el.heading_level().is_some()) {
        return Some(heading);
    }

    if let Some(bold) = find_text(elements, |el| matches!(el.tag.as_str(), "b" | "strong")) {
        return Some(bold);
    }

    find_text(elements, |el| el.tag == "p").map(|text| {
        let lead = text.split('.').next().unwrap_or(&text).trim().to_string();
        if lead.chars().count() > TITLE_MAX_CHARS {
            let truncated: String = lead.chars().take(TITLE_MAX_CHARS).collect();
            format!("{}...", truncated)
        } else {
            lead
        }
    })
}

pub fn derive_title_from(markup: &str, parser: &dyn MarkupParser) -> Result<Option<String>> {
    let fragment = parser.parse(markup)?;
    Ok(derive_title(&fragment.elements))
}

// Depth-first search for the first matching element with non-empty text.
fn find_text(elements: &[Element], matches: impl Fn(&Element) -> bool + Copy) -> Option<String> {
    for element in elements {
        if matches(element) {
            let text = element.text.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
        if let Some(found) = find_text(&element.children, matches) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::HtmlParser;

    fn parse(markup: &str) -> Vec<Element> {
        HtmlParser::new().parse(markup).unwrap().elements
    }

    #[test]
    fn heading_beats_bold() {
        let elements = parse("<p><strong>Bold lead</strong></p><h2>Real Title</h2>");
        assert_eq!(derive_title(&elements), Some("Real Title".to_string()));
    }

    #[test]
    fn bold_beats_paragraph() {
        let elements = parse("<p>Some prose here. More.</p><p><b>Key Point</b></p>");
        assert_eq!(derive_title(&elements), Some("Key Point".to_string()));
    }

    #[test]
    fn paragraph_lead_stops_at_first_period() {
        let elements = parse("<p>Storms form over warm water. They grow quickly.</p>");
        assert_eq!(
            derive_title(&elements),
            Some("Storms form over warm water".to_string())
        );
    }

    #[test]
    fn long_paragraph_lead_is_truncated_with_ellipsis() {
        let long = "w".repeat(80);
        let elements = parse(&format!("<p>{}</p>", long));

        let title = derive_title(&elements).unwrap();
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS + 3);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn nested_bold_is_found() {
        let elements = parse("<div><p>intro <strong>Nested</strong></p></div>");
        assert_eq!(derive_title(&elements), Some("Nested".to_string()));
    }

    #[test]
    fn nothing_extractable_yields_none() {
        assert_eq!(derive_title(&parse("<ul><li>a</li></ul>")), None);
        assert_eq!(derive_title(&parse("")), None);
    }

    #[test]
    fn empty_heading_is_skipped() {
        let elements = parse("<h1> </h1><h2>Second</h2>");
        assert_eq!(derive_title(&elements), Some("Second".to_string()));
    }
}
