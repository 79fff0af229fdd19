//! Topic/shape → chart kind dispatch.
//!
//! An ordered table of (predicate, kind) pairs, first match wins. Keeping
//! the rules in one table makes the matching order auditable; dispatch is
//! strictly on topic text and row shape, never on cell values.

use super::ChartKind;
use crate::models::analyst::Row;

struct ChartRule {
    name: &'static str,
    applies: fn(&str, &[Row]) -> bool,
    kind: ChartKind,
}

const RULES: &[ChartRule] = &[
    ChartRule {
        name: "hourly",
        applies: |topic, _| topic.contains("hour") || topic.contains("time"),
        kind: ChartKind::Bar,
    },
    ChartRule {
        name: "proportional",
        applies: |topic, _| topic.contains("distribution") || topic.contains("range"),
        kind: ChartKind::Pie,
    },
    ChartRule {
        name: "temporal",
        applies: |topic, _| topic.contains("trend"),
        kind: ChartKind::Line,
    },
    ChartRule {
        name: "single-value",
        applies: |_, rows| rows.len() == 1 && rows[0].len() == 1,
        kind: ChartKind::Gauge,
    },
    ChartRule {
        name: "default",
        applies: |_, _| true,
        kind: ChartKind::Bar,
    },
];

/// Pick a chart kind for a topic and its result rows. Deterministic, and
/// total thanks to the catch-all rule.
pub fn select_chart(topic: &str, rows: &[Row]) -> ChartKind {
    let topic = topic.to_lowercase();
    match RULES.iter().find(|rule| (rule.applies)(&topic, rows)) {
        Some(rule) => {
            log::debug!("chart rule '{}' matched '{topic}' -> {}", rule.name, rule.kind);
            rule.kind
        }
        // Unreachable thanks to the catch-all rule.
        None => ChartKind::Bar,
    }
}
