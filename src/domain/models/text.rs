use serde::Deserialize;

use crate::domain::errors::DomainError;

/// Whitespace as understood by the tokenizer and the blank-input check.
///
/// Unicode `White_Space` plus the ASCII information separators `U+001C..=U+001F`.
pub fn is_text_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn is_blank(text: &str) -> bool {
    text.trim_matches(is_text_whitespace).is_empty()
}

/// Request text that satisfies the body schema: at least one character.
///
/// Blank text is still a valid `NonEmptyText`; rejecting it is up to the
/// operation that receives it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct NonEmptyText(String);

impl NonEmptyText {
    pub const MIN_LENGTH: usize = 1;

    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.chars().count() < Self::MIN_LENGTH {
            return Err(DomainError::InvalidData(format!(
                "String should have at least {} character",
                Self::MIN_LENGTH
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_blank(&self) -> bool {
        is_blank(&self.0)
    }
}

impl TryFrom<String> for NonEmptyText {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
