use std::str::FromStr;

use anyhow::{Context, Ok};
use serde_json::Value;
use thiserror::Error;

use crate::lecture::{ActivityAnswer, ActivityData, ChoiceItem, LectureData};

#[derive(Error, Debug)]
enum RequestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store returned an error: {status}")]
    Server { status: u16 },
}

/// A lecture as the document store holds it.
#[derive(Debug)]
pub struct LectureRecord {
    pub id: String,
    pub lecture: LectureData,
    pub published: bool,
    pub activities: Vec<ActivityData>,
}

#[derive(Debug)]
pub struct LectureSummary {
    pub id: String,
    pub title: String,
    pub published: bool,
}

pub fn get_lecture_record(base_url: &str, id: &str) -> anyhow::Result<LectureRecord> {
    let response = ureq::get(format!("{}/lectures/{}", base_url, id).as_str())
        .call()
        .map_err(|e| match e {
            ureq::Error::Status(code, _) => RequestError::Server { status: code },
            other => RequestError::Http(other),
        })
        .context("Failed to send request")?;

    let body: Value = response
        .into_json()
        .context("Failed to read response body")?;

    return Ok(lecture_from_value(&body, id)?);
}

pub fn list_lecture_records(
    base_url: &str,
    published_only: bool,
) -> anyhow::Result<Vec<LectureSummary>> {
    let mut request = ureq::get(format!("{}/lectures", base_url).as_str());
    if published_only {
        request = request.query("published", "true");
    }

    let response = request
        .call()
        .map_err(|e| match e {
            ureq::Error::Status(code, _) => RequestError::Server { status: code },
            other => RequestError::Http(other),
        })
        .context("Failed to send request")?;

    let body: Value = response
        .into_json()
        .context("Failed to read response body")?;

    body.as_array()
        .context("lecture list is not an array")?
        .iter()
        .map(|entry| {
            let id: String = get_attribute(entry, "id").context("lecture must set id")?;
            Ok(LectureSummary {
                title: get_attribute(entry, "title")
                    .context(format!("lecture '{}' must set title", &id))?,
                published: get_attribute(entry, "published").unwrap_or_default(),
                id,
            })
        })
        .collect()
}

pub fn lecture_from_value(value: &Value, id: &str) -> anyhow::Result<LectureRecord> {
    let title: String =
        get_attribute(value, "title").context(format!("lecture '{}' must set title", id))?;

    // description and content degrade to empty rather than failing
    let description: String = get_attribute(value, "description").unwrap_or_default();
    let content: String = get_attribute(value, "content").unwrap_or_default();
    let published: bool = get_attribute(value, "published").unwrap_or_default();

    let activities = collect_activities(value, &title)?;

    Ok(LectureRecord {
        id: id.to_string(),
        lecture: LectureData {
            title,
            description,
            content,
        },
        published,
        activities,
    })
}

fn collect_activities(value: &Value, lecture_title: &str) -> anyhow::Result<Vec<ActivityData>> {
    let default_activities = Vec::new();
    let entries = value
        .get("activities")
        .and_then(|v| v.as_array())
        .unwrap_or(&default_activities);

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let id: String = get_attribute(entry, "id").context(format!(
                "activity '{}' in lecture '{}' must set id",
                index, lecture_title
            ))?;
            let question: String = get_attribute(entry, "question").context(format!(
                "activity '{}' in lecture '{}' must set question",
                &id, lecture_title
            ))?;

            let answer = if let Some(choices) = entry.get("choices").and_then(|c| c.as_array()) {
                let items: anyhow::Result<Vec<ChoiceItem>> = choices
                    .iter()
                    .enumerate()
                    .map(|(choice_index, choice)| {
                        Ok(ChoiceItem {
                            answer: get_attribute(choice, "answer").context(format!(
                                "in activity '{}', choice '{}' has no answer text",
                                &id, choice_index
                            ))?,
                            correct: get_attribute(choice, "correct").context(format!(
                                "in activity '{}', choice '{}' has no correct flag",
                                &id, choice_index
                            ))?,
                        })
                    })
                    .collect();
                ActivityAnswer::Choices(items?)
            } else {
                ActivityAnswer::Constructed(get_attribute(entry, "answer").context(format!(
                    "activity '{}' in lecture '{}' must set choices or an answer",
                    &id, lecture_title
                ))?)
            };

            Ok(ActivityData {
                id,
                question,
                answer,
            })
        })
        .collect()
}

fn get_attribute<T>(value: &Value, attribute: &str) -> Option<T>
where
    T: FromStr,
{
    value.get(attribute).and_then(|v| match v {
        Value::String(s) => T::from_str(s).ok(),
        Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                T::from_str(&f.to_string()).ok()
            } else {
                None
            }
        }
        Value::Bool(b) => T::from_str(&b.to_string()).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_both_answer_shapes() {
        let body = json!({
            "title": "Storms",
            "description": "Intro",
            "content": "<p>x</p>",
            "published": true,
            "activities": [
                {
                    "id": "a1",
                    "question": "Pick one",
                    "choices": [
                        {"answer": "yes", "correct": true},
                        {"answer": "no", "correct": false}
                    ]
                },
                {"id": "a2", "question": "Write it", "answer": "wind"}
            ]
        });

        let record = lecture_from_value(&body, "lec-1").unwrap();

        assert_eq!(record.id, "lec-1");
        assert_eq!(record.lecture.title, "Storms");
        assert!(record.published);
        assert_eq!(record.activities.len(), 2);
        assert_eq!(
            record.activities[0].answer,
            ActivityAnswer::Choices(vec![
                ChoiceItem {
                    answer: "yes".to_string(),
                    correct: true
                },
                ChoiceItem {
                    answer: "no".to_string(),
                    correct: false
                },
            ])
        );
        assert_eq!(
            record.activities[1].answer,
            ActivityAnswer::Constructed("wind".to_string())
        );
    }

    #[test]
    fn missing_title_fails_with_context() {
        let body = json!({"content": "<p>x</p>"});
        let error = lecture_from_value(&body, "lec-9").unwrap_err();

        assert!(error.to_string().contains("lec-9"));
    }

    #[test]
    fn missing_optional_fields_degrade_to_defaults() {
        let body = json!({"title": "Bare"});
        let record = lecture_from_value(&body, "lec-2").unwrap();

        assert_eq!(record.lecture.description, "");
        assert_eq!(record.lecture.content, "");
        assert!(!record.published);
        assert!(record.activities.is_empty());
    }

    #[test]
    fn activity_without_any_answer_shape_fails() {
        let body = json!({
            "title": "Storms",
            "activities": [{"id": "a1", "question": "Q?"}]
        });

        assert!(lecture_from_value(&body, "lec-3").is_err());
    }
}
