pub mod md5_checksum_repository;
pub mod whitespace_tokenizer_repository;
