use chrono::Utc;

use super::types::{Deck, DeckOptions};
use crate::charts::select_chart;
use crate::models::analyst;
use crate::models::slide::Slide;

/// Build a deck for the selected topics, sequentially, in selection order.
/// Every topic yields a slide; unrecognized ones get the analyst fallback.
pub fn build_deck(topics: &[String], options: DeckOptions) -> Deck {
    let mut slides = Vec::with_capacity(topics.len());
    for topic in topics {
        log::info!("analyzing topic '{topic}'");
        slides.push(build_slide(topic));
    }
    Deck { slides, options, generated_at: Utc::now() }
}

fn build_slide(topic: &str) -> Slide {
    let result = analyst::resolve(topic);
    let content = analyst::enhance(&result, topic);
    let chart_kind = select_chart(topic, &result.rows);

    Slide {
        title: topic.to_string(),
        content,
        sql: result.sql,
        data: result.rows,
        chart_kind,
        metadata: result.metadata,
        request_id: result.request_id,
    }
}
