pub mod metadata_dto;
pub mod text_dto;
