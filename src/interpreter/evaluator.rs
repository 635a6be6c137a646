use std::fmt;

use crate::{error::RuntimeError, interpreter::lexer::Token};

/// Result type used by the arithmetic helpers.
///
/// Every operation returns either the computed integer or a `RuntimeError`
/// describing why no result exists.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The four binary operators of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
}

impl BinaryOperator {
    /// Maps an additive token (`+` or `-`) to its operator.
    #[must_use]
    pub const fn additive(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            _ => None,
        }
    }

    /// Maps a multiplicative token (`*` or `/`) to its operator.
    #[must_use]
    pub const fn multiplicative(token: &Token) -> Option<Self> {
        match token {
            Token::Multiply => Some(Self::Mul),
            Token::Divide => Some(Self::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}

/// Applies a binary operator to two integers.
///
/// All operations are checked. Division by zero is tested before dividing, and
/// any result outside the `i64` range (including `i64::MIN / -1`) is reported
/// as an overflow rather than wrapped.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] when `op` is `Div` and `right` is zero.
/// - [`RuntimeError::Overflow`] when the result does not fit an `i64`.
///
/// # Example
/// ```
/// use intcalc::{
///     error::RuntimeError,
///     interpreter::evaluator::{BinaryOperator, apply},
/// };
///
/// assert_eq!(apply(BinaryOperator::Div, -7, 2), Ok(-3));
/// assert_eq!(apply(BinaryOperator::Div, 5, 0), Err(RuntimeError::DivisionByZero));
/// ```
pub fn apply(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Sub => left.checked_sub(right),
        BinaryOperator::Mul => left.checked_mul(right),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(right)
        },
    };
    result.ok_or(RuntimeError::Overflow { operator: op })
}

/// Negates an integer, reporting `-i64::MIN` as an overflow of `-`.
///
/// # Errors
/// Returns [`RuntimeError::Overflow`] for `i64::MIN`.
pub fn negate(value: i64) -> EvalResult<i64> {
    value.checked_neg()
         .ok_or(RuntimeError::Overflow { operator: BinaryOperator::Sub })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(apply(BinaryOperator::Div, 7, 2), Ok(3));
        assert_eq!(apply(BinaryOperator::Div, -7, 2), Ok(-3));
        assert_eq!(apply(BinaryOperator::Div, 7, -2), Ok(-3));
        assert_eq!(apply(BinaryOperator::Div, -7, -2), Ok(3));
    }

    #[test]
    fn division_by_zero_is_checked_first() {
        assert_eq!(apply(BinaryOperator::Div, 0, 0), Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(apply(BinaryOperator::Add, i64::MAX, 1),
                   Err(RuntimeError::Overflow { operator: BinaryOperator::Add }));
        assert_eq!(apply(BinaryOperator::Mul, i64::MAX, 2),
                   Err(RuntimeError::Overflow { operator: BinaryOperator::Mul }));
        assert_eq!(apply(BinaryOperator::Div, i64::MIN, -1),
                   Err(RuntimeError::Overflow { operator: BinaryOperator::Div }));
        assert!(negate(i64::MIN).is_err());
        assert_eq!(negate(5), Ok(-5));
    }

    #[test]
    fn operator_tokens() {
        assert_eq!(BinaryOperator::additive(&Token::Minus), Some(BinaryOperator::Sub));
        assert_eq!(BinaryOperator::additive(&Token::Multiply), None);
        assert_eq!(BinaryOperator::multiplicative(&Token::Divide), Some(BinaryOperator::Div));
        assert_eq!(BinaryOperator::Mul.to_string(), "*");
    }
}
