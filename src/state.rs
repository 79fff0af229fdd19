//! In-memory deck store for the current server process.
//!
//! Decks live only for the session that generated them; nothing persists
//! across restarts. Keyed by the random session deck id.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::deck::Deck;

/// Upper bound on stored decks. Inserting under a new id at the cap
/// evicts an arbitrary stored deck, so the map never grows past this.
const MAX_DECKS: usize = 1024;

#[derive(Default)]
pub struct DeckStore {
    decks: Mutex<HashMap<String, Deck>>,
}

impl DeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, id: &str, deck: Deck) {
        let mut decks = self.decks.lock().unwrap_or_else(|p| p.into_inner());
        if decks.len() >= MAX_DECKS && !decks.contains_key(id) {
            if let Some(victim) = decks.keys().next().cloned() {
                decks.remove(&victim);
            }
        }
        decks.insert(id.to_string(), deck);
    }

    pub fn get(&self, id: &str) -> Option<Deck> {
        let decks = self.decks.lock().unwrap_or_else(|p| p.into_inner());
        decks.get(id).cloned()
    }
}
