//! JSON export round-trip and format tests.

use serde_json::Value;

use deckgen::models::deck::export::{export_filename, export_json, parse_slides};
use deckgen::models::deck::{DeckOptions, build_deck};

fn sample_slides() -> Vec<deckgen::models::slide::Slide> {
    let topics: Vec<String> = ["Traffic Overview", "Peak Traffic Hours", "Speed Distribution"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    build_deck(&topics, DeckOptions::default()).slides
}

#[test]
fn export_then_parse_reproduces_the_slides() {
    let slides = sample_slides();
    let json = export_json(&slides).expect("export failed");
    let parsed = parse_slides(&json).expect("parse failed");
    assert_eq!(parsed, slides);
}

#[test]
fn export_is_an_array_of_slide_objects() {
    let slides = sample_slides();
    let json = export_json(&slides).expect("export failed");
    let value: Value = serde_json::from_str(&json).expect("not valid json");

    let array = value.as_array().expect("export is not an array");
    assert_eq!(array.len(), slides.len());

    for slide in array {
        for key in ["title", "content", "sql", "data", "metadata"] {
            assert!(slide.get(key).is_some(), "missing key {key}");
        }
        let metadata = &slide["metadata"];
        assert!(metadata["confidence"].is_f64());
        assert!(metadata["query_type"].is_string());
        assert!(slide["data"].is_array());
        for row in slide["data"].as_array().unwrap() {
            assert!(row.is_object(), "rows must be flat objects");
        }
    }
}

#[test]
fn chart_kind_serializes_as_lowercase_name() {
    let slides = sample_slides();
    let json = export_json(&slides).expect("export failed");
    let value: Value = serde_json::from_str(&json).expect("not valid json");
    assert_eq!(value[0]["chart_type"], "bar");
    assert_eq!(value[2]["chart_type"], "pie");
}

#[test]
fn column_order_survives_the_round_trip() {
    let slides = sample_slides();
    let json = export_json(&slides).expect("export failed");
    let parsed = parse_slides(&json).expect("parse failed");
    let original: Vec<&String> = slides[1].data[0].keys().collect();
    let reparsed: Vec<&String> = parsed[1].data[0].keys().collect();
    assert_eq!(original, reparsed);
    assert_eq!(original, vec!["HOUR", "COUNT", "AVG_SPEED"]);
}

#[test]
fn export_filename_is_timestamped() {
    let at = chrono::DateTime::from_timestamp(1_724_499_200, 0).expect("valid timestamp");
    assert_eq!(export_filename(at), "slides_1724499200.json");
}
