//! Chart rendering with graceful degradation.
//!
//! Tier 1 is the plotters SVG backend (feature `charts`), tier 2 the
//! built-in CSS charts, tier 3 a plain table for rows that cannot be
//! charted. Empty input short-circuits to a "no data" placeholder before
//! any chart code runs. No tier is a hard failure.

use serde_json::Value;

use super::{ChartKind, palette_color};
use crate::models::analyst::Row;

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
    /// Original cell text, used for axis/value labels.
    pub display: String,
}

/// A chartable (label, value) series extracted from result rows:
/// first column labels, second column numeric values.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label_column: String,
    pub value_column: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value.max(0.0)).sum()
    }
}

/// Extract a series from uniformly-keyed rows. Returns `None` when there
/// are fewer than two columns or the value column is not numeric, which
/// sends rendering to the table tier.
pub fn extract_series(rows: &[Row]) -> Option<Series> {
    let first = rows.first()?;
    let mut cols = first.keys();
    let label_column = cols.next()?.clone();
    let value_column = cols.next()?.clone();

    let mut points = Vec::with_capacity(rows.len());
    for row in rows {
        let label_cell = row.get(&label_column)?;
        let value = row.get(&value_column)?.as_f64()?;
        points.push(SeriesPoint {
            label: display_value(label_cell),
            value,
            display: display_value(row.get(&value_column)?),
        });
    }
    Some(Series { label_column, value_column, points })
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
    /// Share of the series total, in percent.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CssBar {
    pub label: String,
    pub display: String,
    /// Bar width relative to the series maximum, 0..=100.
    pub pct: f64,
    pub color: &'static str,
}

/// Tier-2 chart: data prepared for the CSS chart markup. Line series
/// degrade to bars here; pies become a conic-gradient disc plus legend.
#[derive(Debug, Clone, PartialEq)]
pub struct CssChart {
    pub bars: Vec<CssBar>,
    pub pie_stops: String,
}

impl CssChart {
    pub fn build(kind: ChartKind, series: &Series) -> Self {
        let max = series.max_value();
        let bars = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| CssBar {
                label: p.label.clone(),
                display: p.display.clone(),
                pct: if max > 0.0 { (p.value.max(0.0) / max * 100.0).min(100.0) } else { 0.0 },
                color: match kind {
                    ChartKind::Pie => palette_color(i),
                    _ => palette_color(0),
                },
            })
            .collect();

        let pie_stops = match kind {
            ChartKind::Pie => conic_stops(series),
            _ => String::new(),
        };

        CssChart { bars, pie_stops }
    }
}

/// CSS conic-gradient stop list for a pie, e.g. `#667eea 0% 35%, ...`.
fn conic_stops(series: &Series) -> String {
    let total = series.total();
    if total <= 0.0 {
        return String::new();
    }
    let mut stops = Vec::with_capacity(series.points.len());
    let mut acc = 0.0;
    for (i, p) in series.points.iter().enumerate() {
        let start = acc / total * 100.0;
        acc += p.value.max(0.0);
        let end = acc / total * 100.0;
        stops.push(format!("{} {:.2}% {:.2}%", palette_color(i), start, end));
    }
    stops.join(", ")
}

pub fn legend(series: &Series) -> Vec<LegendEntry> {
    let total = series.total();
    series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| LegendEntry {
            label: p.label.clone(),
            color: palette_color(i),
            share: if total > 0.0 { p.value.max(0.0) / total * 100.0 } else { 0.0 },
        })
        .collect()
}

/// Plain tabular display, the last tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn from_rows(rows: &[Row]) -> Self {
        let columns: Vec<String> = rows
            .first()
            .map(|r| r.keys().cloned().collect())
            .unwrap_or_default();
        let body = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| row.get(c).map(display_value).unwrap_or_default())
                    .collect()
            })
            .collect();
        TableView { columns, rows: body }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedChart {
    NoData,
    Metric {
        label: String,
        value: String,
    },
    Svg {
        kind: ChartKind,
        markup: String,
        legend: Vec<LegendEntry>,
    },
    Css {
        kind: ChartKind,
        chart: CssChart,
        legend: Vec<LegendEntry>,
    },
    Table(TableView),
}

/// Render rows as the selected chart kind, degrading through the tiers.
pub fn render(kind: ChartKind, rows: &[Row], title: &str) -> RenderedChart {
    log::debug!("rendering {kind} chart for '{title}' over {} rows", rows.len());
    if rows.is_empty() {
        return RenderedChart::NoData;
    }

    if kind == ChartKind::Gauge {
        // Single-value result: a metric card, identical in every tier.
        return match rows[0].iter().next() {
            Some((column, value)) => RenderedChart::Metric {
                label: pretty_label(column),
                value: display_value(value),
            },
            None => RenderedChart::NoData,
        };
    }

    let Some(series) = extract_series(rows) else {
        return RenderedChart::Table(TableView::from_rows(rows));
    };

    #[cfg(feature = "charts")]
    {
        match super::svg::draw(kind, &series) {
            Ok(markup) => {
                return RenderedChart::Svg { kind, markup, legend: legend(&series) };
            }
            Err(e) => {
                log::warn!("{e} while rendering '{title}'; degrading to css chart");
            }
        }
    }

    RenderedChart::Css {
        kind,
        chart: CssChart::build(kind, &series),
        legend: legend(&series),
    }
}

impl RenderedChart {
    /// HTML fragment for the slide template. Built in Rust so the template
    /// stays a plain `|safe` insertion.
    pub fn to_html(&self) -> String {
        match self {
            RenderedChart::NoData => {
                r#"<div class="no-data">No data available for visualization</div>"#.to_string()
            }
            RenderedChart::Metric { label, value } => format!(
                r#"<div class="metric-card"><div class="metric-value">{}</div><div class="metric-label">{}</div></div>"#,
                escape(value),
                escape(label),
            ),
            RenderedChart::Svg { kind, markup, legend } => {
                let mut html = format!(r#"<figure class="chart chart-svg">{markup}</figure>"#);
                if *kind == ChartKind::Pie {
                    html.push_str(&legend_html(legend));
                } else {
                    html.push_str(&axis_labels_html(legend));
                }
                html
            }
            RenderedChart::Css { kind, chart, legend } => match kind {
                ChartKind::Pie => format!(
                    r#"<div class="css-pie" style="background: conic-gradient({})"></div>{}"#,
                    chart.pie_stops,
                    legend_html(legend),
                ),
                _ => css_bars_html(chart),
            },
            RenderedChart::Table(table) => table_html(table),
        }
    }
}

fn css_bars_html(chart: &CssChart) -> String {
    let mut html = String::from(r#"<div class="css-chart">"#);
    for bar in &chart.bars {
        html.push_str(&format!(
            r#"<div class="css-bar-row"><span class="css-bar-label">{}</span><div class="css-bar-track"><div class="css-bar" style="width: {:.1}%; background: {}"></div></div><span class="css-bar-value">{}</span></div>"#,
            escape(&bar.label),
            bar.pct,
            bar.color,
            escape(&bar.display),
        ));
    }
    html.push_str("</div>");
    html
}

fn legend_html(legend: &[LegendEntry]) -> String {
    let mut html = String::from(r#"<ul class="legend">"#);
    for entry in legend {
        html.push_str(&format!(
            r#"<li><span class="swatch" style="background: {}"></span>{} ({:.1}%)</li>"#,
            entry.color,
            escape(&entry.label),
            entry.share,
        ));
    }
    html.push_str("</ul>");
    html
}

/// X-axis category labels shown under an SVG bar/line chart, since the
/// SVG tier draws geometry only.
fn axis_labels_html(legend: &[LegendEntry]) -> String {
    let mut html = String::from(r#"<div class="axis-labels">"#);
    for entry in legend {
        html.push_str(&format!(r#"<span>{}</span>"#, escape(&entry.label)));
    }
    html.push_str("</div>");
    html
}

fn table_html(table: &TableView) -> String {
    let mut html = String::from(r#"<table class="data-table"><thead><tr>"#);
    for col in &table.columns {
        html.push_str(&format!("<th>{}</th>", escape(col)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// `AVG_SPEED` → `Avg Speed`.
fn pretty_label(column: &str) -> String {
    column
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::models::analyst::types::row;

    #[test]
    fn extract_series_needs_numeric_value_column() {
        let rows = vec![row([("NAME", json!("a")), ("NOTE", json!("not a number"))])];
        assert!(extract_series(&rows).is_none());
    }

    #[test]
    fn conic_stops_cover_full_circle() {
        let rows = vec![
            row([("RANGE", json!("low")), ("COUNT", json!(1))]),
            row([("RANGE", json!("high")), ("COUNT", json!(3))]),
        ];
        let series = extract_series(&rows).unwrap();
        let stops = conic_stops(&series);
        assert!(stops.starts_with("#667eea 0.00% 25.00%"));
        assert!(stops.ends_with("100.00%"));
    }

    #[test]
    fn pretty_label_title_cases_columns() {
        assert_eq!(pretty_label("AVG_SPEED"), "Avg Speed");
        assert_eq!(pretty_label("total"), "Total");
    }
}
