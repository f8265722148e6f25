//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the error type, token-cursor helpers, and the top-level
//! parse entry point. The precedence-climbing grammar lives in
//! `expressions`, which extends [`Parser`] with further `impl` blocks.

use super::ast::Node;
use super::lexer::{LexError, Lexer};
use super::symbols;
use super::token::{Token, TokenKind};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub pos: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error at offset {}: {}", self.pos, self.message)
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.to_string(),
            pos: err.pos,
        }
    }
}

/// Precedence-climbing parser over an on-demand token stream.
///
/// Holds the lexer and exactly one token of lookahead. A parse either yields
/// a [`Node`] or a [`ParseError`]; trailing input after a complete
/// expression is deliberately ignored.
pub struct Parser<'a> {
    pub(crate) lexer: Lexer<'a>,
    pub(crate) current: Token<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser over `input`, pulling the first token.
    pub fn new(input: &'a [u8]) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse one full expression starting at the current token.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        self.parse_expression(0)
    }

    // ===== Helper methods =====

    pub(crate) fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn offset(&self) -> usize {
        self.lexer.offset()
    }

    /// Decimal value of a digit run, most significant digit first.
    /// Accumulation wraps at the integer width.
    pub(crate) fn number_value(text: &[u8]) -> i64 {
        text.iter().fold(0i64, |value, &d| {
            value
                .wrapping_mul(10)
                .wrapping_add((d - symbols::DIGIT_0) as i64)
        })
    }
}
