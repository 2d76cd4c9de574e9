use std::sync::Arc;

use crate::application::dto::text_dto::{
    ChecksumResponseDto, GenerateQueryDto, TextInputDto, TokenResponseDto,
};
use crate::application::errors::ApplicationError;
use crate::domain::models::text::is_blank;
use crate::domain::repositories::checksum_repository::ChecksumRepository;
use crate::domain::repositories::tokenizer_repository::TokenizerRepository;

const EMPTY_QUERY_MESSAGE: &str = "Text parameter cannot be empty";
const EMPTY_BODY_MESSAGE: &str = "Text cannot be empty";

pub struct TextService {
    tokenizer_repository: Arc<dyn TokenizerRepository>,
    checksum_repository: Arc<dyn ChecksumRepository>,
}

impl TextService {
    pub fn new(
        tokenizer_repository: Arc<dyn TokenizerRepository>,
        checksum_repository: Arc<dyn ChecksumRepository>,
    ) -> Self {
        Self {
            tokenizer_repository,
            checksum_repository,
        }
    }

    /// Tokenize the `text` query parameter. A missing parameter counts as empty.
    pub fn generate_tokens(
        &self,
        query: GenerateQueryDto,
    ) -> Result<TokenResponseDto, ApplicationError> {
        let text = query.text.unwrap_or_default();
        if is_blank(&text) {
            return Err(ApplicationError::EmptyInput(EMPTY_QUERY_MESSAGE.to_string()));
        }

        Ok(self.tokenize(&text))
    }

    pub fn tokenize_text(&self, dto: TextInputDto) -> Result<TokenResponseDto, ApplicationError> {
        if dto.text.is_blank() {
            return Err(ApplicationError::EmptyInput(EMPTY_BODY_MESSAGE.to_string()));
        }

        Ok(self.tokenize(dto.text.as_str()))
    }

    /// Checksum of the text exactly as received; blank text is accepted.
    pub fn compute_checksum(&self, dto: TextInputDto) -> ChecksumResponseDto {
        let checksum = self.checksum_repository.checksum(dto.text.as_str());

        ChecksumResponseDto {
            checksum,
            original_text: dto.text.into_inner(),
        }
    }

    fn tokenize(&self, text: &str) -> TokenResponseDto {
        TokenResponseDto::from(self.tokenizer_repository.tokenize(text))
    }
}
