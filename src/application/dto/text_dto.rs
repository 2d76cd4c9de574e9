use serde::{Deserialize, Serialize};

use crate::domain::models::text::NonEmptyText;

/// JSON body accepted by `/tokenize` and `/checksum`.
#[derive(Debug, Clone, Deserialize)]
pub struct TextInputDto {
    pub text: NonEmptyText,
}

/// Query string accepted by `/generate`.
///
/// Read as raw pairs so a repeated `text` key is not an error; the last
/// occurrence wins and unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct GenerateQueryDto {
    pub text: Option<String>,
}

impl From<Vec<(String, String)>> for GenerateQueryDto {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let text = pairs
            .into_iter()
            .filter(|(key, _)| key == "text")
            .map(|(_, value)| value)
            .last();

        Self { text }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponseDto {
    pub tokens: Vec<String>,
    pub count: usize,
}

impl From<Vec<String>> for TokenResponseDto {
    fn from(tokens: Vec<String>) -> Self {
        Self {
            count: tokens.len(),
            tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumResponseDto {
    pub checksum: String,
    pub original_text: String,
}
