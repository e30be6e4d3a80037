//! Error types for lexing and parsing.

use thiserror::Error;

use crate::span::Location;

/// Result type alias for syntax operations.
pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Error produced while turning source text into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// Input the lexer does not recognize.
    #[error("{location}: unexpected character '{found}'")]
    UnexpectedCharacter { location: Location, found: String },

    /// A token the grammar does not allow at this position.
    #[error("{location}: expected {expected}, found {found}")]
    UnexpectedToken {
        location: Location,
        expected: String,
        found: String,
    },

    /// A construct outside the supported declaration subset.
    #[error("{location}: unsupported syntax: {message}")]
    Unsupported { location: Location, message: String },
}

impl SyntaxError {
    pub fn location(&self) -> &Location {
        match self {
            SyntaxError::UnexpectedCharacter { location, .. }
            | SyntaxError::UnexpectedToken { location, .. }
            | SyntaxError::Unsupported { location, .. } => location,
        }
    }

    pub fn unexpected_token(
        location: Location,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::UnexpectedToken {
            location,
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn unsupported(location: Location, message: impl Into<String>) -> Self {
        Self::Unsupported {
            location,
            message: message.into(),
        }
    }
}
