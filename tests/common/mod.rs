//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use serde_json::json;

use deckgen::models::analyst::Rows;
use deckgen::models::analyst::types::row;

/// Hourly (HOUR, COUNT) rows, the shape the peak-hours responder returns.
pub fn hourly_rows() -> Rows {
    vec![
        row([("HOUR", json!(8)), ("COUNT", json!(12_890))]),
        row([("HOUR", json!(17)), ("COUNT", json!(12_456))]),
        row([("HOUR", json!(9)), ("COUNT", json!(10_234))]),
    ]
}

/// Rows whose second column is text, which no chart tier can plot.
pub fn text_rows() -> Rows {
    vec![
        row([("LOCATION", json!("Downtown")), ("STATUS", json!("congested"))]),
        row([("LOCATION", json!("Riverside")), ("STATUS", json!("clear"))]),
    ]
}

/// A single-cell result, the gauge shape.
pub fn single_cell_rows() -> Rows {
    vec![row([("TOTAL_VOLUME", json!(2_450_000))])]
}
