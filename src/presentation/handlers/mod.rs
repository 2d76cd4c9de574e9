pub mod helpers;
pub mod metadata_handlers;
pub mod text_handlers;
