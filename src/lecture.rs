use serde::{Deserialize, Serialize};

/// The authored material a slide sequence is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LectureData {
    /// lecture title
    pub title: String,

    /// short lead-in shown on the title slide
    pub description: String,

    /// rich-text body as a single HTML string
    pub content: String,
}

/// A quiz activity attached to a lecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityData {
    pub id: String,
    pub question: String,
    pub answer: ActivityAnswer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivityAnswer {
    /// multiple choice, each option flagged for correctness
    Choices(Vec<ChoiceItem>),

    /// single free-text correct answer
    Constructed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceItem {
    pub answer: String,
    pub correct: bool,
}
