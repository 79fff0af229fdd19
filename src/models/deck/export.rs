//! JSON export of a generated slide list.
//!
//! The export is the serde form of [`Slide`], so `parse_slides` on the
//! exported text reproduces the original list field-for-field. PDF and
//! PowerPoint export are deliberately not implemented; the handlers show
//! a "coming soon" notice instead.

use crate::models::slide::Slide;

pub fn export_json(slides: &[Slide]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(slides)
}

pub fn parse_slides(json: &str) -> Result<Vec<Slide>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Download filename for an export, e.g. `slides_1724499200.json`.
pub fn export_filename(generated_at: chrono::DateTime<chrono::Utc>) -> String {
    format!("slides_{}.json", generated_at.timestamp())
}
