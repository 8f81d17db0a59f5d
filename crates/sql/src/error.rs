//! Error types for the CREATE TABLE grammar

use crate::parsing::Token;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Parse failures. All of them are raised at the point of detection and
/// propagate unchanged to the caller; the parser never resynchronizes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The current token matches none of the alternatives at a mandatory
    /// grammar point.
    #[error("syntax error at offset {offset}: expected {expected}, found {}", describe(.found))]
    Syntax {
        /// The construct the grammar required here.
        expected: String,
        /// The offending token, `None` at end of input.
        found: Option<Token>,
        /// Byte offset of the offending token in the input.
        offset: usize,
    },

    /// A recognized grammar branch that has no implementation, e.g. `PARTITION
    /// BY HASH`. The input may well be valid SQL.
    #[error("unsupported construct at offset {offset}: {construct} (found {})", describe(.found))]
    Unsupported {
        construct: String,
        found: Option<Token>,
        offset: usize,
    },

    #[error("lex error at offset {offset}: {message}")]
    Lex { message: String, offset: usize },
}

impl Error {
    /// Returns true for recognized-but-unimplemented constructs.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported { .. })
    }

    /// Byte offset the error was detected at.
    pub fn offset(&self) -> usize {
        match self {
            Error::Syntax { offset, .. }
            | Error::Unsupported { offset, .. }
            | Error::Lex { offset, .. } => *offset,
        }
    }
}

fn describe(token: &Option<Token>) -> String {
    match token {
        Some(token) => token.to_string(),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::Keyword;

    #[test]
    fn test_syntax_error_names_expectation_and_token() {
        let err = Error::Syntax {
            expected: "keyword TABLE".into(),
            found: Some(Token::Ident("tabel".into())),
            offset: 7,
        };
        assert_eq!(
            err.to_string(),
            "syntax error at offset 7: expected keyword TABLE, found identifier tabel"
        );
        assert!(!err.is_unsupported());
    }

    #[test]
    fn test_unsupported_at_end_of_input() {
        let err = Error::Unsupported {
            construct: "ON clause".into(),
            found: None,
            offset: 30,
        };
        assert!(err.is_unsupported());
        assert_eq!(err.offset(), 30);
        assert!(err.to_string().ends_with("(found end of input)"));

        let err = Error::Unsupported {
            construct: "ON clause".into(),
            found: Some(Token::Keyword(Keyword::On)),
            offset: 30,
        };
        assert!(err.to_string().contains("keyword ON"));
    }
}
