pub mod deck_handlers;
pub mod export_handlers;
pub mod forms;
