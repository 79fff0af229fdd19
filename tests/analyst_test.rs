//! Mock analyst responder and insight enhancer tests.

use deckgen::models::analyst::{enhance, resolve, types};
use deckgen::models::topic::CATALOG;

#[test]
fn every_catalog_topic_resolves_to_a_complete_result() {
    for topic in CATALOG {
        let result = resolve(topic);
        assert!(!result.sql.is_empty(), "empty sql for {topic}");
        assert!(!result.explanation.is_empty(), "empty explanation for {topic}");
        assert!(!result.rows.is_empty(), "no rows for {topic}");
        assert!(
            (0.0..=1.0).contains(&result.metadata.confidence),
            "confidence out of range for {topic}"
        );
    }
}

#[test]
fn result_rows_are_uniformly_keyed() {
    for topic in CATALOG {
        let result = resolve(topic);
        let columns = types::columns(&result.rows);
        for row in &result.rows {
            let keys: Vec<&str> = row.keys().map(String::as_str).collect();
            assert_eq!(keys, columns, "ragged rows for {topic}");
        }
    }
}

#[test]
fn unrecognized_topic_falls_back_with_low_confidence() {
    let result = resolve("Quarterly Llama Census");
    assert!(result.metadata.confidence < 0.2);
    assert_eq!(result.metadata.query_type, "fallback");
    assert!(result.explanation.contains("Quarterly Llama Census"));
    assert!(!result.sql.is_empty());
}

#[test]
fn matching_is_case_insensitive() {
    let lower = resolve("peak traffic hours");
    let upper = resolve("PEAK TRAFFIC HOURS");
    assert_eq!(lower, upper);
}

#[test]
fn responder_order_decides_overlapping_matches() {
    // "overview" is listed before "hour", so a topic containing both
    // resolves to the overview response.
    let result = resolve("hourly overview");
    assert_eq!(result.request_id, "req_overview");
}

#[test]
fn peak_hours_rows_carry_an_hour_column() {
    let result = resolve("Peak Traffic Hours");
    let columns = types::columns(&result.rows);
    assert!(columns.contains(&"HOUR"));
}

#[test]
fn enhancer_output_is_strictly_longer() {
    for topic in CATALOG {
        let result = resolve(topic);
        let enhanced = enhance(&result, topic);
        assert!(
            enhanced.len() > result.explanation.len(),
            "enhancer did not extend explanation for {topic}"
        );
        assert!(enhanced.starts_with(&result.explanation));
    }
}

#[test]
fn enhancer_mentions_topic_and_confidence() {
    let result = resolve("Seasonal Trends");
    let enhanced = enhance(&result, "Seasonal Trends");
    assert!(enhanced.contains("seasonal trends"));
    assert!(enhanced.contains("87%"));
}
