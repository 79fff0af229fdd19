use serde::{Deserialize, Serialize};

use crate::charts::ChartKind;
use crate::models::analyst::{AnalysisMetadata, Rows};

/// One generated slide: a topic's enhanced insight text, its source query
/// and rows, and the chart kind chosen for it. Immutable once built.
///
/// The serialized form is the JSON export format, so field names here are
/// the export contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub content: String,
    pub sql: String,
    pub data: Rows,
    #[serde(rename = "chart_type")]
    pub chart_kind: ChartKind,
    pub metadata: AnalysisMetadata,
    pub request_id: String,
}

impl Slide {
    pub fn data_points(&self) -> usize {
        self.data.len()
    }
}
