//! The fixed catalog of analysis topics offered on the welcome page.
//!
//! Topics are plain display names. Anything outside the catalog still
//! resolves (the analyst falls back to a generic low-confidence result),
//! but the UI only ever offers these.

/// Catalog order is also the display order of the topic checkboxes.
pub const CATALOG: &[&str] = &[
    "Traffic Overview",
    "Peak Traffic Hours",
    "Speed Distribution",
    "Geographic Analysis",
    "Seasonal Trends",
    "Volume Analysis",
    "Congestion Patterns",
];

/// Topics pre-selected when the form first loads.
pub const DEFAULT_SELECTION: &[&str] = &[
    "Traffic Overview",
    "Peak Traffic Hours",
    "Speed Distribution",
];

pub fn is_default(name: &str) -> bool {
    DEFAULT_SELECTION.contains(&name)
}
