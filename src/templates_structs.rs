//! Template context structures for the Askama templates.

use askama::Template;

use crate::charts;
use crate::models::deck::Deck;
use crate::models::slide::Slide;
use crate::models::topic;

pub struct TopicOption {
    pub name: &'static str,
    pub checked: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub topics: Vec<TopicOption>,
    pub error: Option<String>,
    pub flash: Option<String>,
    pub sample_rows: Vec<(String, String)>,
    pub sample_chart_html: String,
}

impl IndexTemplate {
    pub fn build(error: Option<String>, flash: Option<String>) -> Self {
        let topics = topic::CATALOG
            .iter()
            .map(|&name| TopicOption { name, checked: topic::is_default(name) })
            .collect();
        IndexTemplate {
            topics,
            error,
            flash,
            sample_rows: sample_preview(),
            sample_chart_html: sample_chart(),
        }
    }
}

/// Static dataset blurb shown on the welcome page.
fn sample_preview() -> Vec<(String, String)> {
    [
        ("Traffic Records", "156,789 records"),
        ("Time Range", "Full Year 2024"),
        ("Geographic Coverage", "1,200+ locations"),
        ("Update Frequency", "Real-time"),
    ]
    .iter()
    .map(|&(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Sample 24-hour traffic pattern, rendered through the normal chart path.
fn sample_chart() -> String {
    let volumes = [
        300, 200, 150, 100, 120, 400, 800, 1200, 1000, 600, 500, 550, 600, 650, 700, 900, 1100,
        1300, 900, 700, 600, 500, 400, 350,
    ];
    let rows: Vec<_> = volumes
        .iter()
        .enumerate()
        .map(|(hour, &volume)| {
            crate::models::analyst::types::row([
                ("HOUR", serde_json::json!(hour)),
                ("TRAFFIC_VOLUME", serde_json::json!(volume)),
            ])
        })
        .collect();
    charts::render(charts::ChartKind::Line, &rows, "24-Hour Traffic Pattern Sample").to_html()
}

/// Per-slide view model: the slide fields plus pre-rendered chart markup
/// and the confidence badge.
pub struct SlideView {
    pub number: usize,
    pub title: String,
    pub content: String,
    pub sql: String,
    pub chart_html: String,
    pub chart_kind: String,
    pub query_type: String,
    pub request_id: String,
    pub confidence_pct: String,
    pub badge_label: &'static str,
    pub badge_class: &'static str,
}

impl SlideView {
    pub fn build(number: usize, slide: &Slide) -> Self {
        let chart_html = charts::render(slide.chart_kind, &slide.data, &slide.title).to_html();
        let (badge_label, badge_class) = confidence_badge(slide.metadata.confidence);
        SlideView {
            number,
            title: slide.title.clone(),
            content: slide.content.clone(),
            sql: slide.sql.clone(),
            chart_html,
            chart_kind: slide.chart_kind.to_string(),
            query_type: slide.metadata.query_type.clone(),
            request_id: slide.request_id.clone(),
            confidence_pct: format!("{:.0}%", slide.metadata.confidence * 100.0),
            badge_label,
            badge_class,
        }
    }
}

#[derive(Template)]
#[template(path = "deck.html")]
pub struct DeckTemplate {
    pub slides: Vec<SlideView>,
    pub include_sql: bool,
    pub include_metadata: bool,
    pub slide_count: usize,
    pub total_data_points: usize,
    pub average_confidence_pct: String,
    pub flash: Option<String>,
}

impl DeckTemplate {
    pub fn build(deck: &Deck, flash: Option<String>) -> Self {
        let slides = deck
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| SlideView::build(i + 1, slide))
            .collect();
        DeckTemplate {
            slides,
            include_sql: deck.options.include_sql,
            include_metadata: deck.options.include_metadata,
            slide_count: deck.slides.len(),
            total_data_points: deck.total_data_points(),
            average_confidence_pct: format!("{:.1}%", deck.average_confidence() * 100.0),
            flash,
        }
    }
}

/// Badge label and CSS class for a confidence score.
pub fn confidence_badge(confidence: f64) -> (&'static str, &'static str) {
    if confidence >= 0.8 {
        ("High Confidence", "high-confidence")
    } else if confidence >= 0.6 {
        ("Medium Confidence", "medium-confidence")
    } else {
        ("Low Confidence", "low-confidence")
    }
}
