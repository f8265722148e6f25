//! Token definitions and the operator descriptor table
//!
//! [`TokenKind`] doubles as the terminal descriptor table: precedence,
//! associativity, and arity are pure `match` tables on the variant, so there
//! is exactly one process-wide descriptor per terminal category.

use std::fmt;

/// All terminal categories produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of decimal digits.
    Number,
    Plus,
    /// `-`; binary subtraction or prefix negation depending on position.
    Minus,
    Star,
    Slash,
    Percent,
    /// `**`, the power operator.
    StarStar,
    /// `!`, postfix factorial.
    Bang,
    LParen,
    RParen,
    /// End of input; returned indefinitely once the cursor passes the buffer.
    Eof,
}

impl TokenKind {
    /// Binding strength when this kind appears in binary position.
    ///
    /// `None` for everything that is not a binary operator, including `!`
    /// (factorial is unary-only).
    pub fn binary_precedence(self) -> Option<u8> {
        match self {
            TokenKind::Plus | TokenKind::Minus => Some(6),
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some(7),
            TokenKind::StarStar => Some(20),
            _ => None,
        }
    }

    /// Associativity of the binary use. Power is the only right-associative
    /// operator; for `-` this applies to subtraction, not negation.
    pub fn left_associative(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
        )
    }

    pub fn is_binary(self) -> bool {
        self.binary_precedence().is_some()
    }

    pub fn is_unary(self) -> bool {
        matches!(self, TokenKind::Minus | TokenKind::Bang)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Percent => write!(f, "'%'"),
            TokenKind::StarStar => write!(f, "'**'"),
            TokenKind::Bang => write!(f, "'!'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// One lexical unit: a terminal tag plus the raw bytes that produced it.
///
/// `text` is the matched slice of the input buffer: the digit run for a
/// number, the operator symbol(s) otherwise, empty for [`TokenKind::Eof`].
/// Tokens are produced on demand and never collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a [u8],
}
