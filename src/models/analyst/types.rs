use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One result row: column name → value, in analyst column order.
/// All rows of a result share the same keys in the same order.
pub type Row = serde_json::Map<String, Value>;

pub type Rows = Vec<Row>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub confidence: f64,
    pub query_type: String,
}

/// What the (simulated) analyst returns for one topic query.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub request_id: String,
    pub sql: String,
    pub rows: Rows,
    pub explanation: String,
    pub metadata: AnalysisMetadata,
}

/// Build a row from (column, value) pairs, keeping column order.
pub fn row<const N: usize>(cols: [(&str, Value); N]) -> Row {
    let mut map = Row::new();
    for (name, value) in cols {
        map.insert(name.to_string(), value);
    }
    map
}

/// Column names of a result, taken from the first row.
pub fn columns(rows: &[Row]) -> Vec<&str> {
    rows.first()
        .map(|r| r.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
