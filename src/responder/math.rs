//! Extraction and evaluation of single binary arithmetic expressions.
//!
//! Only the first `number operator number` occurrence is considered;
//! operands are integer literals parsed as `f64`. Division by exactly zero
//! evaluates to the NaN sentinel so the caller can render it as an
//! undefined value rather than a number.

use once_cell::sync::Lazy;
use regex::Regex;

static BINARY_EXPR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*([+\-*/^])\s*(\d+)").unwrap());

/// A parsed `lhs op rhs` expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr {
    pub lhs: f64,
    pub op: char,
    pub rhs: f64,
}

/// Extract the first binary expression from the input, if any.
pub fn extract(input: &str) -> Option<BinaryExpr> {
    let caps = BINARY_EXPR.captures(input)?;
    let lhs = caps[1].parse::<f64>().ok()?;
    let op = caps[2].chars().next()?;
    let rhs = caps[3].parse::<f64>().ok()?;
    Some(BinaryExpr { lhs, op, rhs })
}

/// Evaluate an extracted expression.
///
/// `^` is exponentiation. `/` with a zero divisor returns NaN.
pub fn evaluate(expr: BinaryExpr) -> f64 {
    match expr.op {
        '+' => expr.lhs + expr.rhs,
        '-' => expr.lhs - expr.rhs,
        '*' => expr.lhs * expr.rhs,
        '/' => {
            if expr.rhs == 0.0 {
                f64::NAN
            } else {
                expr.lhs / expr.rhs
            }
        }
        '^' => expr.lhs.powf(expr.rhs),
        _ => f64::NAN,
    }
}
