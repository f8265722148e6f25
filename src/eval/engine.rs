//! Tree-walking evaluator
//!
//! [`eval`] is a pure function over the AST. Arithmetic edge cases are
//! defined values, not errors: division and modulo by zero yield 0, and all
//! operations wrap at the `i64` width.

use super::arith;
use crate::parser::{BinOp, Node, UnOp};

/// Evaluate an expression tree to an integer.
pub fn eval(node: &Node) -> i64 {
    match node {
        Node::Number(value) => *value,
        Node::Binary { op, left, right } => eval_binary(*op, left, right),
        Node::Unary { op, operand } => match op {
            UnOp::Neg => eval(operand).wrapping_neg(),
            UnOp::Fact => arith::factorial(eval(operand)),
        },
    }
}

fn eval_binary(op: BinOp, left: &Node, right: &Node) -> i64 {
    match op {
        BinOp::Add => eval(left).wrapping_add(eval(right)),
        BinOp::Sub => eval(left).wrapping_sub(eval(right)),
        BinOp::Mul => eval(left).wrapping_mul(eval(right)),
        BinOp::Div => {
            let rhs = eval(right);
            if rhs == 0 {
                0
            } else {
                eval(left).wrapping_div(rhs)
            }
        }
        BinOp::Mod => {
            let rhs = eval(right);
            if rhs == 0 {
                0
            } else {
                eval(left).wrapping_rem(rhs)
            }
        }
        BinOp::Pow => arith::pow(eval(left), eval(right)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn eval_str(input: &[u8]) -> i64 {
        let node = Parser::new(input).unwrap().parse().unwrap();
        eval(&node)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval_str(b"1+2*3"), 7);
        assert_eq!(eval_str(b"(1+2)*3"), 9);
        assert_eq!(eval_str(b"10-4-3"), 3);
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(eval_str(b"2**3**2"), 512);
        assert_eq!(eval_str(b"(2**3)**2"), 64);
    }

    #[test]
    fn test_factorial_chain() {
        assert_eq!(eval_str(b"3!!"), 720);
        assert_eq!(eval_str(b"0!"), 1);
        assert_eq!(eval_str(b"-3!"), -6);
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(eval_str(b"--3"), 3);
        assert_eq!(eval_str(b"---3"), -3);
    }

    #[test]
    fn test_division_and_modulo() {
        assert_eq!(eval_str(b"17/5"), 3);
        assert_eq!(eval_str(b"17%5"), 2);
        assert_eq!(eval_str(b"-17/5"), -3);
        assert_eq!(eval_str(b"-17%5"), -2);
    }

    #[test]
    fn test_division_by_zero_yields_zero() {
        assert_eq!(eval_str(b"5/0"), 0);
        assert_eq!(eval_str(b"5%0"), 0);
        assert_eq!(eval_str(b"5/(3-3)"), 0);
        assert_eq!(eval_str(b"123%(2-2)"), 0);
    }

    #[test]
    fn test_negative_exponent_truncates() {
        assert_eq!(eval_str(b"2**-3"), 0);
        assert_eq!(eval_str(b"1**-5"), 1);
        assert_eq!(eval_str(b"0**-3"), 0);
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        assert_eq!(eval_str(b"  1 +  2 * 3 "), 7);
    }

    #[test]
    fn test_min_div_minus_one_is_total() {
        // i64::MIN / -1 wraps instead of trapping.
        let min = format!("-{}", i64::MIN.unsigned_abs());
        let expr = format!("({})/-1", min);
        assert_eq!(eval_str(expr.as_bytes()), i64::MIN);
    }
}
