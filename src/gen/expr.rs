//! Stochastic expression generator
//!
//! Mirrors the parser's grammar top-down, writing symbol bytes into an
//! output buffer. Every production draws its branch from the shared
//! [`Lehmer`] stream in a fixed order, so a seed identifies one exact output
//! buffer. The draw order and branch thresholds are part of the public
//! contract; seed-keyed corpora depend on them byte for byte.
//!
//! # Budget
//!
//! A third of the requested size is treated as the emission budget
//! (`available = max(0, max_size/3 - emitted)`). Once fewer than 4 symbols
//! remain available, every production collapses to a number literal, which
//! bounds recursion and buffer growth.

use super::prng::Lehmer;
use crate::eval::arith;
use crate::parser::symbols;

/// Expression generator over a fixed size budget and a borrowed PRNG.
pub struct ExprGen<'a> {
    buf: Vec<u8>,
    max_size: usize,
    rng: &'a mut Lehmer,
}

impl<'a> ExprGen<'a> {
    /// Generate one expression with an emission budget derived from
    /// `max_size`, consuming draws from `rng`.
    ///
    /// The output is always lexable and parseable by this crate's parser.
    pub fn generate(max_size: usize, rng: &'a mut Lehmer) -> Vec<u8> {
        let mut gen = ExprGen {
            buf: Vec::with_capacity(max_size),
            max_size,
            rng,
        };
        gen.gen_expression();
        gen.buf
    }

    /// Symbols still available under the budget.
    fn available(&self) -> usize {
        (self.max_size / 3).saturating_sub(self.buf.len())
    }

    fn chars_available(&self) -> bool {
        self.available() > 3
    }

    /// `expression`: a power chain (30%) or a binary pair. Division and
    /// modulo together get a 10% share so most generated operators stay
    /// cheap to evaluate.
    fn gen_expression(&mut self) {
        if !self.chars_available() {
            self.gen_number();
            return;
        }
        if self.rng.next_range(0, 10) <= 2 {
            self.gen_unary();
            self.buf.push(symbols::STAR);
            self.buf.push(symbols::STAR);
            // Small exponents only, drawn after the base is emitted.
            let digit = self.rng.next_range(2, 10);
            self.buf.push(symbols::DIGIT_0 + digit as u8);
        } else {
            const OPS: [u8; 5] = [
                symbols::PLUS,
                symbols::MINUS,
                symbols::STAR,
                symbols::SLASH,
                symbols::PERCENT,
            ];
            // The operator is drawn before either operand is generated.
            let index = if self.rng.next_range(0, 10) == 0 {
                3 + self.rng.next_range(0, 2) as usize
            } else {
                self.rng.next_range(0, 3) as usize
            };
            self.gen_unary();
            self.buf.push(OPS[index]);
            self.gen_unary();
        }
    }

    /// `unary`: negation (30%), a factorial suffix (2 in 20, drawn only
    /// when negation was declined), or a primary.
    fn gen_unary(&mut self) {
        if !self.chars_available() {
            self.gen_number();
            return;
        }
        if self.rng.next_range(0, 10) <= 2 {
            self.buf.push(symbols::MINUS);
            self.gen_unary();
        } else if self.rng.next_range(0, 20) <= 1 {
            self.gen_unary();
            self.buf.push(symbols::BANG);
        } else {
            self.gen_primary();
        }
    }

    /// `primary`: a parenthesized expression (50%) or a number.
    fn gen_primary(&mut self) {
        if !self.chars_available() {
            self.gen_number();
            return;
        }
        if self.rng.next_range(0, 10) <= 4 {
            self.buf.push(symbols::LPAREN);
            self.gen_expression();
            self.buf.push(symbols::RPAREN);
        } else {
            self.gen_number();
        }
    }

    /// `number`: a signed literal of exactly `clamp(available, 1, 5)`
    /// digits, most significant first, zero-padded.
    fn gen_number(&mut self) {
        let len = self.available().clamp(1, 5);
        let low = -arith::pow(10, len as i64 - 1);
        let high = arith::pow(10, len as i64);
        let mut num = self.rng.next_range(low, high);

        if num < 0 {
            self.buf.push(symbols::MINUS);
            num = -num;
        }

        let start = self.buf.len();
        self.buf.resize(start + len, 0);
        for slot in self.buf[start..].iter_mut().rev() {
            *slot = symbols::DIGIT_0 + (num % 10) as u8;
            num /= 10;
        }
    }
}
