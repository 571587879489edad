use lectern::markup::HtmlParser;
use lectern::segment::{build_slides, SegmentationConfig, Strategy};
use lectern::slide::SlideKind;
use lectern::{ActivityAnswer, ActivityData, LectureData};

fn storms(content: &str) -> LectureData {
    LectureData {
        title: "Storms".to_string(),
        description: "Intro".to_string(),
        content: content.to_string(),
    }
}

fn quiz(id: &str, question: &str) -> ActivityData {
    ActivityData {
        id: id.to_string(),
        question: question.to_string(),
        answer: ActivityAnswer::Constructed("answer".to_string()),
    }
}

#[test]
fn smart_single_heading_lecture_yields_three_slides() {
    let content = format!("<h1>Wind</h1><p>{}</p>", vec!["word"; 90].join(" "));
    let lecture = storms(&content);
    let activities = vec![quiz("a1", "Q?")];

    let slides = build_slides(&lecture, &activities, &Strategy::Smart, &HtmlParser::new()).unwrap();

    assert_eq!(slides.len(), 3);

    assert_eq!(slides[0].kind, SlideKind::Title);
    assert_eq!(slides[0].title.as_deref(), Some("Storms"));
    assert_eq!(slides[0].body.as_deref(), Some("Intro"));

    assert_eq!(slides[1].kind, SlideKind::Content);
    assert_eq!(slides[1].title.as_deref(), Some("Wind"));
    assert!(slides[1].body.as_deref().unwrap().contains("word"));

    assert_eq!(slides[2].kind, SlideKind::Activity);
    assert_eq!(slides[2].title.as_deref(), Some("Activity 1"));
    assert_eq!(slides[2].activity.as_ref().unwrap().id, "a1");
}

#[test]
fn headed_lecture_with_an_image_keeps_document_order() {
    let content = "<h1>Wind</h1><p>a</p><img src=\"gust.png\" alt=\"Gust\"><p>b</p><h2>Rain</h2><p>c</p>";
    let slides = build_slides(&storms(content), &[], &Strategy::Smart, &HtmlParser::new()).unwrap();

    let kinds: Vec<SlideKind> = slides.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SlideKind::Title,
            SlideKind::Content,
            SlideKind::Image,
            SlideKind::Content,
            SlideKind::Content,
        ]
    );
    assert_eq!(slides[2].image.as_deref(), Some("gust.png"));
    assert_eq!(slides[2].title.as_deref(), Some("Gust"));
}

#[test]
fn marker_splitting_round_trips_segment_count() {
    let content = "<p>one</p>---SLIDE---<p>two</p><!-- SLIDE --><p>three</p>";
    let slides = build_slides(
        &storms(content),
        &[quiz("a1", "Q?")],
        &Strategy::Manual,
        &HtmlParser::new(),
    )
    .unwrap();

    let bodies: Vec<&str> = slides
        .iter()
        .filter(|s| s.kind == SlideKind::Content)
        .map(|s| s.body.as_deref().unwrap())
        .collect();
    assert_eq!(bodies, vec!["<p>one</p>", "<p>two</p>", "<p>three</p>"]);
}

#[test]
fn custom_strategy_honors_both_bounds() {
    // fifteen headed sections overflow a cap of five and merge down to it
    let sections: String = (1..=15)
        .map(|n| format!("<h2>Section {}</h2><p>body {}</p>", n, n))
        .collect();
    let config = SegmentationConfig {
        min_content_slides: 2,
        max_content_slides: 5,
        ..SegmentationConfig::default()
    };
    let slides = build_slides(
        &storms(&sections),
        &[],
        &Strategy::Custom(config),
        &HtmlParser::new(),
    )
    .unwrap();

    let content_slides: Vec<_> = slides
        .iter()
        .filter(|s| s.kind == SlideKind::Content)
        .collect();
    assert_eq!(content_slides.len(), 5);
    assert_eq!(content_slides[0].title.as_deref(), Some("Section 1"));
    assert!(content_slides[0].body.as_deref().unwrap().contains("body 3"));
}

#[test]
fn every_slide_id_is_unique() {
    let content = "<h1>Same</h1><p>a</p><h2>Same</h2><p>b</p><h2>Same</h2><p>c</p>";
    let slides = build_slides(
        &storms(content),
        &[quiz("a1", "Q?"), quiz("a2", "Q2?")],
        &Strategy::Smart,
        &HtmlParser::new(),
    )
    .unwrap();

    let mut ids: Vec<&str> = slides.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    let before = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn slides_serialize_to_json_with_kind_tags() {
    let slides = build_slides(
        &storms("<p>x</p>"),
        &[quiz("a1", "Q?")],
        &Strategy::Smart,
        &HtmlParser::new(),
    )
    .unwrap();

    let json = serde_json::to_string(&slides).unwrap();
    assert!(json.contains("\"kind\":\"title\""));
    assert!(json.contains("\"kind\":\"activity\""));
    assert!(json.contains("\"question\":\"Q?\""));
}
