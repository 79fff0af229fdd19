//! Chart selection and rendering.
//!
//! `select` maps a topic and result shape to a [`ChartKind`] through an
//! ordered rule table. `render` turns the kind plus rows into markup with a
//! three-tier degradation: plotters SVG (feature `charts`), the built-in
//! CSS charts, and finally a plain table.

pub mod render;
pub mod select;
#[cfg(feature = "charts")]
pub mod svg;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use render::{RenderedChart, render};
pub use select::select_chart;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
    Gauge,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
            ChartKind::Gauge => "gauge",
        };
        f.write_str(name)
    }
}

/// Series colors shared by the SVG and CSS tiers.
pub const PALETTE: &[&str] = &[
    "#667eea", "#764ba2", "#48bb78", "#ed8936", "#f56565", "#4299e1", "#9f7aea", "#38b2ac",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug)]
pub struct ChartError(pub String);

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chart backend error: {}", self.0)
    }
}
