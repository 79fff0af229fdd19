use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::slide::Slide;

/// Explicit generation parameters, threaded through the build and the
/// slide view instead of living in ambient session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckOptions {
    pub include_sql: bool,
    pub include_metadata: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        DeckOptions { include_sql: true, include_metadata: true }
    }
}

/// A generated slide deck, held in memory for the current session only.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub slides: Vec<Slide>,
    pub options: DeckOptions,
    pub generated_at: DateTime<Utc>,
}

impl Deck {
    pub fn total_data_points(&self) -> usize {
        self.slides.iter().map(Slide::data_points).sum()
    }

    pub fn average_confidence(&self) -> f64 {
        if self.slides.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.slides.iter().map(|s| s.metadata.confidence).sum();
        sum / self.slides.len() as f64
    }
}
