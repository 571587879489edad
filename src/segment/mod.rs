mod chunk;
mod heading;
mod logical;
mod marker;
mod subchunk;
mod title;

use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use chunk::{word_count, ContentChunk, SegmentItem};
pub use title::{derive_title, DEFAULT_TITLE};

use crate::lecture::{ActivityData, LectureData};
use crate::markup::MarkupParser;
use crate::slide::{assign_ids, Slide};

// Plain-text pacing for the structure-blind strategy.
const SIMPLE_WORDS_PER_SLIDE: usize = 150;
const SIMPLE_MIN_SLIDES: usize = 3;
const SIMPLE_MAX_SLIDES: usize = 6;

/// Tuning for the `custom` strategy. Values are trusted as supplied; nothing
/// is clamped or cross-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// word bound the sub-chunker regroups oversized chunks under
    pub max_words_per_slide: usize,

    /// below this many chunks, heading splitting is abandoned
    pub min_content_slides: usize,

    /// above this many chunks, the merge pass folds neighbors together
    pub max_content_slides: usize,

    /// tags eligible as soft break points
    pub break_tags: Vec<String>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            max_words_per_slide: 100,
            min_content_slides: 3,
            max_content_slides: 10,
            break_tags: vec![
                "p".to_string(),
                "ul".to_string(),
                "ol".to_string(),
                "blockquote".to_string(),
            ],
        }
    }
}

/// How a lecture's content is cut into slides.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// headings first, logical breaks as the fallback
    Smart,

    /// author-inserted markers, falling back to `Smart` when there are none
    Manual,

    /// heading split measured against caller-supplied bounds
    Custom(SegmentationConfig),

    /// plain text cut into evenly paced parts, structure ignored
    Simple,
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "smart" => Ok(Strategy::Smart),
            "manual" => Ok(Strategy::Manual),
            "custom" => Ok(Strategy::Custom(SegmentationConfig::default())),
            "simple" => Ok(Strategy::Simple),
            other => Err(anyhow::anyhow!("unknown strategy '{}'", other)),
        }
    }
}

/// Builds the full ordered slide sequence for a lecture: one title slide,
/// the strategy's content and image slides, then one activity slide per
/// activity. Pure over its inputs; the only failure mode is a parser error.
pub fn build_slides(
    lecture: &LectureData,
    activities: &[ActivityData],
    strategy: &Strategy,
    parser: &dyn MarkupParser,
) -> Result<Vec<Slide>> {
    let items = collect_items(&lecture.content, strategy, parser)?;

    let mut slides = Vec::with_capacity(items.len() + activities.len() + 1);
    slides.push(Slide::title_slide(&lecture.title, &lecture.description));

    for item in items {
        match item {
            SegmentItem::Chunk(chunk) => {
                let slide_title = match chunk.title {
                    Some(title) => title,
                    None => title::derive_title_from(&chunk.markup, parser)?
                        .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                };
                slides.push(Slide::content(slide_title, chunk.markup));
            }
            SegmentItem::Image { src, alt } => slides.push(Slide::image(src, alt)),
        }
    }

    for (index, activity) in activities.iter().enumerate() {
        slides.push(Slide::activity(
            format!("Activity {}", index + 1),
            activity.clone(),
        ));
    }

    assign_ids(&mut slides);
    Ok(slides)
}

fn collect_items(
    content: &str,
    strategy: &Strategy,
    parser: &dyn MarkupParser,
) -> Result<Vec<SegmentItem>> {
    match strategy {
        Strategy::Smart => smart_items(content, parser),
        Strategy::Manual => {
            if marker::contains_marker(content) {
                let chunks = marker::split_on_markers(content, parser)?;
                Ok(chunks.into_iter().map(SegmentItem::Chunk).collect())
            } else {
                smart_items(content, parser)
            }
        }
        Strategy::Custom(config) => {
            let fragment = parser.parse(content)?;
            let mut items = heading::split_by_headings(&fragment.elements);

            if items.len() < config.min_content_slides {
                items = logical::split_by_logic(&fragment.elements, config, parser)?
                    .into_iter()
                    .map(SegmentItem::Chunk)
                    .collect();
            }
            if items.len() > config.max_content_slides {
                items = merge_overflow(items, config.max_content_slides);
            }

            Ok(items)
        }
        Strategy::Simple => simple_items(content, parser),
    }
}

// Heading split, abandoned for logical breaks when it cannot produce more
// than one slide.
fn smart_items(content: &str, parser: &dyn MarkupParser) -> Result<Vec<SegmentItem>> {
    let fragment = parser.parse(content)?;
    let items = heading::split_by_headings(&fragment.elements);

    if items.len() <= 1 {
        let config = SegmentationConfig::default();
        let chunks = logical::split_by_logic(&fragment.elements, &config, parser)?;
        return Ok(chunks.into_iter().map(SegmentItem::Chunk).collect());
    }

    Ok(items)
}

fn simple_items(content: &str, parser: &dyn MarkupParser) -> Result<Vec<SegmentItem>> {
    let fragment = parser.parse(content)?;
    let words: Vec<&str> = fragment.text.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Vec::new());
    }

    let target = words
        .len()
        .div_ceil(SIMPLE_WORDS_PER_SLIDE)
        .clamp(SIMPLE_MIN_SLIDES, SIMPLE_MAX_SLIDES);
    let group_size = words.len().div_ceil(target);

    Ok(words
        .chunks(group_size)
        .enumerate()
        .map(|(index, group)| {
            SegmentItem::Chunk(ContentChunk {
                markup: format!("<p>{}</p>", group.join(" ")),
                title: Some(format!("Part {}", index + 1)),
                word_count: group.len(),
            })
        })
        .collect())
}

/// Folds an overflowing item sequence into exactly `max` contiguous groups,
/// the leading groups one item larger when the split is uneven. Singleton
/// groups pass through untouched; larger groups fuse into one chunk titled
/// by their first member, bodies joined by a blank line.
fn merge_overflow(items: Vec<SegmentItem>, max: usize) -> Vec<SegmentItem> {
    if max == 0 || items.len() <= max {
        return items;
    }

    let base = items.len() / max;
    let extra = items.len() % max;

    let mut merged = Vec::with_capacity(max);
    let mut start = 0;
    for index in 0..max {
        let size = base + usize::from(index < extra);
        let group = &items[start..start + size];
        start += size;

        if group.len() == 1 {
            merged.push(group[0].clone());
        } else {
            merged.push(SegmentItem::Chunk(ContentChunk {
                title: group[0].title(),
                markup: group
                    .iter()
                    .map(SegmentItem::markup)
                    .collect::<Vec<_>>()
                    .join("\n\n"),
                word_count: group.iter().map(SegmentItem::words).sum(),
            }));
        }
    }

    merged
}
