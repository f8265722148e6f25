//! Expression evaluation
//!
//! This module reduces a parsed [`Node`](crate::parser::Node) tree to an
//! integer:
//! - [`engine`]: structural recursion over the tree with operator dispatch
//! - [`arith`]: exponentiation by squaring and factorial
//!
//! # Semantics
//!
//! All arithmetic is wrapping two's-complement `i64`. Division and modulo by
//! zero evaluate to 0; a negative exponent evaluates through `1 / pow(b, -e)`
//! under the same rule. Evaluation is total: no input tree produces an error
//! or a panic.

pub mod arith;
pub mod engine;

pub use engine::eval;
