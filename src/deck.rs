use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::lecture::{ActivityAnswer, LectureData};
use crate::slide::{Slide, SlideKind};

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum DeckFrontmatter<'a> {
    Title(&'a str),
    Description(&'a str),
    SlideCount(usize),
    Slides(Vec<SlideMeta<'a>>),
}

#[derive(Serialize, Debug)]
struct SlideMeta<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: &'a SlideKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
}

/// Renders a slide sequence as one markdown document: YAML frontmatter with
/// per-slide metadata, then one section per slide.
pub fn serialize_deck(lecture: &LectureData, slides: &[Slide]) -> Result<String> {
    let mut fm: BTreeMap<&str, DeckFrontmatter> = BTreeMap::new();
    fm.insert("title", DeckFrontmatter::Title(lecture.title.as_str()));
    fm.insert(
        "description",
        DeckFrontmatter::Description(lecture.description.as_str()),
    );
    fm.insert("slide_count", DeckFrontmatter::SlideCount(slides.len()));
    fm.insert(
        "slides",
        DeckFrontmatter::Slides(
            slides
                .iter()
                .map(|slide| SlideMeta {
                    id: slide.id.as_str(),
                    kind: &slide.kind,
                    title: slide.title.as_deref(),
                })
                .collect(),
        ),
    );

    let mut body = String::with_capacity(400 * slides.len());
    for slide in slides {
        body.push_str(&render_slide(slide));
    }

    Ok(format!(
        r#"---
{}---

{}"#,
        serde_yaml_ng::to_string(&fm).context("failed to serialize deck frontmatter")?,
        body
    ))
}

fn render_slide(slide: &Slide) -> String {
    let title = slide.title.as_deref().unwrap_or("");

    match slide.kind {
        SlideKind::Title => format!(
            "# {} {{#{}}}\n\n{}\n\n",
            title,
            slide.id,
            slide.body.as_deref().unwrap_or("")
        ),
        SlideKind::Content => format!(
            "## {} {{#{}}}\n\n{}\n\n",
            title,
            slide.id,
            slide.body.as_deref().unwrap_or("")
        ),
        SlideKind::Image => format!(
            "![{}]({})\n\n",
            title,
            slide.image.as_deref().unwrap_or("")
        ),
        SlideKind::Activity => render_activity(slide, title),
    }
}

fn render_activity(slide: &Slide, title: &str) -> String {
    let mut section = format!("## {} {{#{}}}\n\n", title, slide.id);

    if let Some(activity) = &slide.activity {
        section.push_str(&activity.question);
        section.push_str("\n\n");

        match &activity.answer {
            ActivityAnswer::Choices(choices) => {
                for choice in choices {
                    let mark = if choice.correct { "x" } else { " " };
                    section.push_str(&format!("- [{}] {}\n", mark, choice.answer));
                }
                section.push('\n');
            }
            ActivityAnswer::Constructed(answer) => {
                section.push_str(&format!("**Answer:** {}\n\n", answer));
            }
        }
    }

    section
}
