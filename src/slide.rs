use serde::{Deserialize, Serialize};

use crate::lecture::ActivityData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideKind {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "content")]
    Content,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "activity")]
    Activity,
}

/// One presentable unit of a deck.
///
/// The kind decides which payload field is populated: `body` for title and
/// content slides, `image` for image slides, `activity` for activity slides.
/// The constructors below are the only way slides are built, so a slide never
/// carries two payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// unique within one sequence, assigned after ordering is final
    pub id: String,

    pub kind: SlideKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityData>,
}

impl Slide {
    pub fn title_slide(title: &str, description: &str) -> Self {
        Self {
            id: String::new(),
            kind: SlideKind::Title,
            title: Some(title.to_string()),
            body: Some(description.to_string()),
            image: None,
            activity: None,
        }
    }

    pub fn content(title: String, body: String) -> Self {
        Self {
            id: String::new(),
            kind: SlideKind::Content,
            title: Some(title),
            body: Some(body),
            image: None,
            activity: None,
        }
    }

    pub fn image(src: String, alt: Option<String>) -> Self {
        Self {
            id: String::new(),
            kind: SlideKind::Image,
            title: alt,
            body: None,
            image: Some(src),
            activity: None,
        }
    }

    pub fn activity(title: String, activity: ActivityData) -> Self {
        Self {
            id: String::new(),
            kind: SlideKind::Activity,
            title: Some(title),
            body: None,
            image: None,
            activity: Some(activity),
        }
    }
}

/// Assigns every slide a stable id: the slug of its title, or a positional
/// fallback when the title is empty. The slugger deduplicates repeats.
pub fn assign_ids(slides: &mut [Slide]) {
    let mut slugger = github_slugger::Slugger::default();

    for (index, slide) in slides.iter_mut().enumerate() {
        let title = slide.title.as_deref().unwrap_or("").trim();
        slide.id = if title.is_empty() {
            format!("slide-{}", index + 1)
        } else {
            slugger.slug(title)
        };
    }
}
