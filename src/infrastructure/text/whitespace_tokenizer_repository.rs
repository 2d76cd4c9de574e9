use crate::domain::models::text::is_text_whitespace;
use crate::domain::repositories::tokenizer_repository::TokenizerRepository;

/// Splits text on runs of whitespace, dropping empty pieces.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizerRepository;

impl WhitespaceTokenizerRepository {
    pub fn new() -> Self {
        Self
    }
}

impl TokenizerRepository for WhitespaceTokenizerRepository {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(is_text_whitespace)
            .map(|token| token.trim_matches(is_text_whitespace))
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
