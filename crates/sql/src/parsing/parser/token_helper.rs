//! Token helper module
//!
//! Provides common token manipulation methods used across all parser modules.

use super::super::Token;
use crate::error::{Error, Result};

/// Base trait for token navigation and manipulation.
/// All other parser traits extend this trait.
///
/// The stream offers one token of lookahead and no backtracking, so every
/// grammar decision is made from `peek()` before anything is consumed.
pub trait TokenHelper {
    /// Fetches the next lexer token, or errors if none is found.
    fn next(&mut self) -> Result<Token>;

    /// Peeks the next lexer token if any, without consuming it.
    fn peek(&mut self) -> Result<Option<&Token>>;

    /// Byte offset of the next token, or of the end of input.
    fn offset(&mut self) -> usize;

    /// Returns the next lexer token if it satisfies the predicate.
    fn next_if(&mut self, predicate: impl Fn(&Token) -> bool) -> Option<Token> {
        self.peek().ok()?.filter(|&t| predicate(t))?;
        self.next().ok()
    }

    /// Passes the next lexer token through the closure, consuming it if the
    /// closure returns Some. Returns the result of the closure.
    fn next_if_map<T>(&mut self, f: impl Fn(&Token) -> Option<T>) -> Option<T> {
        let value = f(self.peek().ok()??)?;
        self.next().ok()?;
        Some(value)
    }

    /// Consumes the next lexer token if it is the given token, returning true.
    fn next_is(&mut self, token: Token) -> bool {
        self.next_if(|t| t == &token).is_some()
    }

    /// Consumes the next lexer token if it is the given token. Equivalent to
    /// next_is(), but expresses intent better.
    fn skip(&mut self, token: Token) {
        self.next_is(token);
    }

    /// Consumes the next lexer token if it's the expected token, or errors.
    fn expect(&mut self, expect: Token) -> Result<()> {
        if self.next_is(expect.clone()) {
            return Ok(());
        }
        Err(self.syntax_error(&expect.to_string()))
    }

    /// Returns the next identifier, bare or quoted, or errors naming
    /// `expected`.
    fn expect_ident(&mut self, expected: &str) -> Result<String> {
        match self.next_if_map(|token| match token {
            Token::Ident(ident) | Token::QuotedIdent(ident) => Some(ident.clone()),
            _ => None,
        }) {
            Some(ident) => Ok(ident),
            None => Err(self.syntax_error(expected)),
        }
    }

    /// Returns the next identifier, or errors if not found.
    fn next_ident(&mut self) -> Result<String> {
        self.expect_ident("identifier")
    }

    /// Returns true if the next token is a bare identifier matching the given
    /// string (case-insensitive), without consuming it.
    fn peek_ident_eq(&mut self, expected: &str) -> bool {
        matches!(self.peek(), Ok(Some(Token::Ident(s))) if s.eq_ignore_ascii_case(expected))
    }

    /// Consumes the next token if it is a bare identifier matching the given
    /// string (case-insensitive).
    fn next_if_ident_eq(&mut self, expected: &str) -> bool {
        self.next_if(|token| matches!(token, Token::Ident(s) if s.eq_ignore_ascii_case(expected)))
            .is_some()
    }

    /// Returns true if the next token can start a name.
    fn peek_is_name(&mut self) -> bool {
        matches!(
            self.peek(),
            Ok(Some(Token::Ident(_) | Token::QuotedIdent(_)))
        )
    }

    /// Builds a syntax error for the current token. A pending lex error takes
    /// precedence, since it is the real cause.
    fn syntax_error(&mut self, expected: &str) -> Error {
        let offset = self.offset();
        match self.peek() {
            Ok(found) => Error::Syntax {
                expected: expected.to_string(),
                found: found.cloned(),
                offset,
            },
            Err(err) => err,
        }
    }

    /// Builds an unsupported-construct error for the current token.
    fn unsupported(&mut self, construct: &str) -> Error {
        let offset = self.offset();
        match self.peek() {
            Ok(found) => {
                tracing::debug!("unsupported construct at offset {}: {}", offset, construct);
                Error::Unsupported {
                    construct: construct.to_string(),
                    found: found.cloned(),
                    offset,
                }
            }
            Err(err) => err,
        }
    }
}
