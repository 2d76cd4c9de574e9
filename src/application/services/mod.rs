pub mod metadata_service;
pub mod text_service;
