//! # Introduction
//!
//! mathexpr is a self-contained arithmetic expression toolkit: it tokenizes
//! a byte buffer, parses it with operator-precedence rules, and evaluates
//! the resulting tree to an integer. Running the other way, it generates
//! syntactically valid expressions from a seeded deterministic PRNG for use
//! as parser test input.
//!
//! ## Pipeline
//!
//! ```text
//! Seed → Generator → bytes → Lexer → tokens → Parser → AST → Evaluator → integer
//! ```
//!
//! 1. [`gen`] — Park–Miller PRNG and the budgeted stochastic generator.
//! 2. [`parser`] — tokenization and precedence-climbing parsing.
//! 3. [`eval`] — total, pure tree evaluation (`/` and `%` by zero yield 0).
//! 4. [`driver`] — seeded generate/parse/evaluate rounds reduced to a
//!    checksum, usable as a golden regression value.
//!
//! ## Supported grammar
//!
//! Decimal integer literals, binary `+ - * / %`, right-associative `**`,
//! prefix negation, chainable postfix factorial, and parentheses. Input is
//! ASCII; spaces are skipped.
//!
//! ## Example
//!
//! ```rust
//! use mathexpr::eval::eval;
//! use mathexpr::parser::Parser;
//!
//! let node = Parser::new(b"2**3**2 + 1").unwrap().parse().unwrap();
//! assert_eq!(eval(&node), 513);
//! ```

pub mod driver;
pub mod eval;
pub mod gen;
pub mod parser;
