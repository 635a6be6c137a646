use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur during validation, lexing or parsing.
///
/// Positions are zero-based byte offsets into the whitespace-stripped
/// line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The stripped line is shorter than the shortest accepted input.
    #[error("Input is too short ({length} character(s)); enter something like: 2 + 2")]
    InputTooShort {
        /// Number of characters left after stripping whitespace.
        length: usize,
    },
    /// The line ends with one of `+ - * /`.
    #[error("Input cannot end with the operator '{operator}'")]
    TrailingOperator {
        /// The offending last character.
        operator: char,
    },
    /// A token that cannot appear at this point of the grammar.
    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken {
        /// The token encountered.
        token:    TokenKind,
        /// Where the token starts.
        position: usize,
    },
    /// The input ran out while a concrete token was still expected.
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEndOfInput {
        /// The kind of token the parser was waiting for.
        expected: TokenKind,
    },
    /// The numbers of `(` and `)` differ.
    #[error("Unbalanced parentheses: {open} '(' against {close} ')'")]
    UnbalancedParentheses {
        /// Opening parentheses counted.
        open:  usize,
        /// Closing parentheses counted.
        close: usize,
    },
    /// Parentheses are nested deeper than the parser allows.
    #[error("Parentheses nested deeper than {limit} levels at position {position}")]
    NestingTooDeep {
        /// The nesting limit in effect.
        limit:    usize,
        /// Where the first parenthesis past the limit starts.
        position: usize,
    },
    /// A digit run does not fit a signed 64-bit integer.
    #[error("Integer literal {literal} at position {position} is too large")]
    NumericOverflow {
        /// The digits as written.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
}
