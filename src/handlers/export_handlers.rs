use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::errors::AppError;
use crate::models::deck::export::{export_filename, export_json};
use crate::session;
use crate::state::DeckStore;

/// GET /deck/export.json — download the generated slides as JSON.
pub async fn json(
    store: web::Data<DeckStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let deck = session::existing_deck_id(&session).and_then(|id| store.get(&id));
    let Some(deck) = deck else {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/"))
            .finish());
    };

    let body = export_json(&deck.slides)?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", export_filename(deck.generated_at)),
        ))
        .body(body))
}

/// POST /deck/export/pdf — intentionally unimplemented.
pub async fn pdf(session: Session) -> Result<HttpResponse, AppError> {
    placeholder(session, "PDF")
}

/// POST /deck/export/pptx — intentionally unimplemented.
pub async fn pptx(session: Session) -> Result<HttpResponse, AppError> {
    placeholder(session, "PowerPoint")
}

fn placeholder(session: Session, format: &str) -> Result<HttpResponse, AppError> {
    session::set_flash(&session, &format!("{format} export is coming soon."));
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/deck"))
        .finish())
}
