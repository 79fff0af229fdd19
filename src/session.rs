//! Cookie-session helpers: the per-session deck id and flash messages.

use actix_session::Session;
use rand::Rng;

/// Get the session's deck id, creating a random one on first use. The id
/// keys the in-memory deck store; the deck itself never enters the cookie.
pub fn deck_id(session: &Session) -> String {
    if let Ok(Some(id)) = session.get::<String>("deck_id") {
        return id;
    }
    let id = generate_id();
    let _ = session.insert("deck_id", &id);
    id
}

/// Deck id without creating one, for read-only pages.
pub fn existing_deck_id(session: &Session) -> Option<String> {
    session.get::<String>("deck_id").unwrap_or(None)
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

/// Random 16-byte hex id.
fn generate_id() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    hex::encode(bytes)
}
