use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Text was supplied but nothing is left after trimming whitespace.
    #[error("Empty input: {0}")]
    EmptyInput(String),
}
