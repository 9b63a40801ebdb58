use std::fmt::{self, Display};

/// Errors produced when parsing a language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LangCodeError {
    Empty,
    Unsupported(String),
}

impl Display for LangCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LangCodeError::Empty => write!(f, "language code cannot be empty"),
            LangCodeError::Unsupported(code) => {
                write!(f, "unsupported language code: {code}")
            }
        }
    }
}

impl std::error::Error for LangCodeError {}

pub type Result<T> = std::result::Result<T, LangCodeError>;
