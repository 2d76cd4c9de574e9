pub mod checksum_repository;
pub mod tokenizer_repository;
