//! Expression parsing implementation
//!
//! Precedence climbing for binary operators, recursive descent for unary
//! prefixes, postfix factorial chains, and primaries. All methods extend the
//! [`Parser`] struct defined in `parse`.
//!
//! # Grammar
//!
//! ```text
//! expression := unary (binop expression)*     (climbing on precedence)
//! unary      := '-' unary | primary ('!')*
//! primary    := '(' expression ')' | number
//! ```
//!
//! The grammar is permissive where the token stream runs dry: a missing
//! closing paren is tolerated, and tokens after a complete expression are
//! left unconsumed.

use super::ast::{BinOp, Node, UnOp};
use super::parse::{ParseError, Parser};
use super::token::TokenKind;

/// AST operator for a binary terminal.
fn binop_for(kind: TokenKind) -> BinOp {
    match kind {
        TokenKind::Plus => BinOp::Add,
        TokenKind::Minus => BinOp::Sub,
        TokenKind::Star => BinOp::Mul,
        TokenKind::Slash => BinOp::Div,
        TokenKind::Percent => BinOp::Mod,
        TokenKind::StarStar => BinOp::Pow,
        _ => unreachable!("not a binary operator: {kind:?}"),
    }
}

impl<'a> Parser<'a> {
    /// Parse a binary-operator chain with precedence climbing.
    ///
    /// Folds operators whose precedence is at least `min_prec` into the left
    /// operand. The recursive minimum is `prec + 1` for left-associative
    /// operators and `prec` for right-associative ones (power).
    pub(crate) fn parse_expression(&mut self, min_prec: u8) -> Result<Node, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(prec) = self.current.kind.binary_precedence() {
            if prec < min_prec {
                break;
            }
            let kind = self.current.kind;
            let next_min = if kind.left_associative() {
                prec + 1
            } else {
                prec
            };
            self.advance()?;
            let right = self.parse_expression(next_min)?;
            left = Node::binary(binop_for(kind), left, right);
        }

        Ok(left)
    }

    /// Parse prefix negation, then wrap any postfix factorial marks.
    ///
    /// Factorial is chainable: `5!!` is `(5!)!`.
    fn parse_unary(&mut self) -> Result<Node, ParseError> {
        let mut node = if self.check(TokenKind::Minus) {
            self.advance()?;
            Node::unary(UnOp::Neg, self.parse_unary()?)
        } else {
            self.parse_primary()?
        };

        while self.check(TokenKind::Bang) {
            node = Node::unary(UnOp::Fact, node);
            self.advance()?;
        }

        Ok(node)
    }

    /// Parse a parenthesized expression or a number literal.
    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        match self.current.kind {
            TokenKind::LParen => {
                self.advance()?;
                let node = self.parse()?;
                // Missing ')' is tolerated, not an error.
                if self.check(TokenKind::RParen) {
                    self.advance()?;
                }
                Ok(node)
            }
            TokenKind::Number => {
                let value = Self::number_value(self.current.text);
                self.advance()?;
                Ok(Node::Number(value))
            }
            kind => Err(ParseError {
                message: format!("expected a number or '(', found {kind}"),
                pos: self.offset(),
            }),
        }
    }
}
