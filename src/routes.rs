use actix_web::web;

use crate::handlers;

/// Application routes, shared between the server binary and the handler
/// tests. Static files and the 404 default service stay in `main`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::deck_handlers::index))
        .route("/generate", web::post().to(handlers::deck_handlers::generate))
        .route("/deck", web::get().to(handlers::deck_handlers::view))
        .route("/deck/export.json", web::get().to(handlers::export_handlers::json))
        .route("/deck/export/pdf", web::post().to(handlers::export_handlers::pdf))
        .route("/deck/export/pptx", web::post().to(handlers::export_handlers::pptx));
}
