/// Parsing errors.
///
/// Defines every error that can be raised before a value exists: input
/// validation, lexing and parsing. These are all detected while walking the
/// text of a single line.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while combining already parsed operands, such
/// as division by zero or arithmetic overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that aborts the evaluation of one input line.
///
/// The REPL shell only ever sees this type; the wrapped phase error decides
/// the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The line was rejected before or during parsing.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The line parsed but an arithmetic step failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Result type returned by the public evaluation entry points.
pub type CalcResult<T> = Result<T, CalcError>;
