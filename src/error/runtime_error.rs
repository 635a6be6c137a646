use thiserror::Error;

use crate::interpreter::evaluator::BinaryOperator;

/// Represents all errors that can occur while combining operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// The result of an operation does not fit a signed 64-bit integer.
    #[error("Arithmetic overflow while evaluating '{operator}'")]
    Overflow {
        /// The operator whose result overflowed.
        operator: BinaryOperator,
    },
}
