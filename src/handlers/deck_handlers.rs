use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::forms;
use crate::errors::{AppError, render};
use crate::models::deck::{DeckOptions, build_deck};
use crate::session;
use crate::state::DeckStore;
use crate::templates_structs::{DeckTemplate, IndexTemplate};

/// GET / — welcome page with the topic form and sample data preview.
pub async fn index(session: Session) -> Result<HttpResponse, AppError> {
    let flash = session::take_flash(&session);
    render(IndexTemplate::build(None, flash))
}

/// POST /generate — build the deck for the selected topics and redirect
/// to the slide view. An empty selection re-renders the form with an
/// error instead of generating anything.
pub async fn generate(
    store: web::Data<DeckStore>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let pairs = forms::parse_form_body(&body);
    let topics: Vec<String> = forms::values(&pairs, "topics")
        .into_iter()
        .map(String::from)
        .collect();

    if topics.is_empty() {
        let tmpl =
            IndexTemplate::build(Some("Select at least one topic to generate a deck.".into()), None);
        return render(tmpl);
    }

    let options = DeckOptions {
        include_sql: forms::is_checked(&pairs, "include_sql"),
        include_metadata: forms::is_checked(&pairs, "include_metadata"),
    };

    log::info!("generating deck for {} topic(s)", topics.len());
    let deck = build_deck(&topics, options);

    let deck_id = session::deck_id(&session);
    store.put(&deck_id, deck);

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/deck"))
        .finish())
}

/// GET /deck — render the generated slides. Without a deck in the current
/// session, send the visitor back to the topic form.
pub async fn view(
    store: web::Data<DeckStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let deck = session::existing_deck_id(&session).and_then(|id| store.get(&id));
    match deck {
        Some(deck) => {
            let flash = session::take_flash(&session);
            render(DeckTemplate::build(&deck, flash))
        }
        None => Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/"))
            .finish()),
    }
}
