//! Deck builder tests: ordering, slide content, option threading.

use deckgen::charts::ChartKind;
use deckgen::models::analyst::resolve;
use deckgen::models::deck::{DeckOptions, build_deck};

fn topics(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn two_topics_produce_two_slides_in_input_order() {
    let deck = build_deck(
        &topics(&["Traffic Overview", "Peak Traffic Hours"]),
        DeckOptions::default(),
    );
    assert_eq!(deck.slides.len(), 2);
    assert_eq!(deck.slides[0].title, "Traffic Overview");
    assert_eq!(deck.slides[1].title, "Peak Traffic Hours");
}

#[test]
fn slide_content_is_the_enhanced_explanation() {
    let deck = build_deck(&topics(&["Traffic Overview"]), DeckOptions::default());
    let raw = resolve("Traffic Overview");
    let slide = &deck.slides[0];
    assert!(slide.content.len() > raw.explanation.len());
    assert!(slide.content.starts_with(&raw.explanation));
    assert_eq!(slide.sql, raw.sql);
    assert_eq!(slide.data, raw.rows);
}

#[test]
fn chart_kinds_follow_the_selection_rules() {
    let deck = build_deck(
        &topics(&[
            "Traffic Overview",
            "Peak Traffic Hours",
            "Speed Distribution",
            "Seasonal Trends",
            "Volume Analysis",
        ]),
        DeckOptions::default(),
    );
    let kinds: Vec<ChartKind> = deck.slides.iter().map(|s| s.chart_kind).collect();
    assert_eq!(
        kinds,
        vec![
            ChartKind::Bar,
            ChartKind::Bar,
            ChartKind::Pie,
            ChartKind::Line,
            ChartKind::Gauge,
        ]
    );
}

#[test]
fn unknown_topics_still_yield_a_slide() {
    let deck = build_deck(
        &topics(&["Traffic Overview", "Quarterly Llama Census"]),
        DeckOptions::default(),
    );
    assert_eq!(deck.slides.len(), 2);
    assert!(deck.slides[1].metadata.confidence < 0.2);
}

#[test]
fn options_are_carried_on_the_deck() {
    let options = DeckOptions { include_sql: false, include_metadata: true };
    let deck = build_deck(&topics(&["Traffic Overview"]), options);
    assert_eq!(deck.options, options);
}

#[test]
fn summary_statistics_aggregate_over_slides() {
    let deck = build_deck(
        &topics(&["Traffic Overview", "Peak Traffic Hours"]),
        DeckOptions::default(),
    );
    // 1 overview row + 5 hourly rows.
    assert_eq!(deck.total_data_points(), 6);
    let expected = (0.9 + 0.92) / 2.0;
    assert!((deck.average_confidence() - expected).abs() < 1e-9);
}
