pub mod builder;
pub mod export;
pub mod types;

pub use builder::build_deck;
pub use types::{Deck, DeckOptions};
