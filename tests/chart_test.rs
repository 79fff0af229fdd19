//! Chart selection rules and the render degradation tiers.

mod common;

use common::*;
use deckgen::charts::{ChartKind, RenderedChart, render, select_chart};
use deckgen::models::analyst::resolve;

#[test]
fn hour_and_time_topics_select_bar() {
    assert_eq!(select_chart("Peak Traffic Hours", &hourly_rows()), ChartKind::Bar);
    assert_eq!(select_chart("Response Time Analysis", &hourly_rows()), ChartKind::Bar);
}

#[test]
fn distribution_and_range_topics_select_pie() {
    assert_eq!(select_chart("Speed Distribution", &hourly_rows()), ChartKind::Pie);
    assert_eq!(select_chart("Speed Range Breakdown", &hourly_rows()), ChartKind::Pie);
}

#[test]
fn trend_topics_select_line() {
    assert_eq!(select_chart("Seasonal Trends", &hourly_rows()), ChartKind::Line);
}

#[test]
fn single_cell_results_select_gauge() {
    assert_eq!(select_chart("Volume Analysis", &single_cell_rows()), ChartKind::Gauge);
}

#[test]
fn everything_else_defaults_to_bar() {
    assert_eq!(select_chart("Geographic Analysis", &hourly_rows()), ChartKind::Bar);
    assert_eq!(select_chart("Congestion Patterns", &text_rows()), ChartKind::Bar);
}

#[test]
fn topic_rules_win_over_shape_rules() {
    // A single-cell result under a "distribution" topic is still a pie,
    // because the topic rules come first in the table.
    assert_eq!(select_chart("Odd Distribution", &single_cell_rows()), ChartKind::Pie);
}

#[test]
fn selection_is_deterministic() {
    for topic in deckgen::models::topic::CATALOG {
        let rows = resolve(topic).rows;
        assert_eq!(select_chart(topic, &rows), select_chart(topic, &rows));
    }
}

#[test]
fn empty_rows_render_as_no_data_placeholder() {
    let rendered = render(ChartKind::Bar, &[], "Empty");
    assert_eq!(rendered, RenderedChart::NoData);
    assert!(rendered.to_html().contains("No data available"));
}

#[test]
fn gauge_renders_as_metric_card() {
    let rendered = render(ChartKind::Gauge, &single_cell_rows(), "Volume Analysis");
    match &rendered {
        RenderedChart::Metric { label, value } => {
            assert_eq!(label, "Total Volume");
            assert_eq!(value, "2450000");
        }
        other => panic!("expected metric card, got {other:?}"),
    }
    assert!(rendered.to_html().contains("metric-card"));
}

#[test]
fn unchartable_rows_degrade_to_table() {
    let rendered = render(ChartKind::Bar, &text_rows(), "Status Overview");
    match &rendered {
        RenderedChart::Table(table) => {
            assert_eq!(table.columns, vec!["LOCATION", "STATUS"]);
            assert_eq!(table.rows.len(), 2);
        }
        other => panic!("expected table fallback, got {other:?}"),
    }
    let html = rendered.to_html();
    assert!(html.contains("<table"));
    assert!(html.contains("Downtown"));
}

#[cfg(feature = "charts")]
#[test]
fn numeric_rows_render_as_svg() {
    for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Pie] {
        let rendered = render(kind, &hourly_rows(), "Peak Traffic Hours");
        match &rendered {
            RenderedChart::Svg { markup, legend, .. } => {
                assert!(markup.contains("<svg"));
                assert_eq!(legend.len(), 3);
            }
            other => panic!("expected svg for {kind:?}, got {other:?}"),
        }
    }
}

#[cfg(not(feature = "charts"))]
#[test]
fn numeric_rows_render_as_css_chart_without_backend() {
    let rendered = render(ChartKind::Bar, &hourly_rows(), "Peak Traffic Hours");
    assert!(matches!(rendered, RenderedChart::Css { .. }));
    assert!(rendered.to_html().contains("css-chart"));
}

#[test]
fn html_fragments_escape_cell_text() {
    use deckgen::models::analyst::types::row;
    use serde_json::json;

    let rows = vec![row([
        ("NAME", json!("<script>alert(1)</script>")),
        ("NOTE", json!("x & y")),
    ])];
    let html = render(ChartKind::Bar, &rows, "Escaping").to_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}
