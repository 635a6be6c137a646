//! # intcalc
//!
//! intcalc is an interactive integer calculator written in Rust.
//! It validates, tokenizes, parses and evaluates arithmetic lines made of
//! integers, `+ - * /` and parentheses, with the usual precedence rules and
//! truncating integer division.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcResult,
    interpreter::{
        lexer::Tokenizer,
        parser::core::{ParseMode, Parser},
        validator::{strip_whitespace, validate},
    },
};

/// Provides the error types of every phase.
///
/// This module defines all errors that can be raised while validating,
/// lexing, parsing or evaluating a line, plus the umbrella `CalcError` the
/// public entry points return.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Carries positions, counts and offending tokens for user feedback.
/// - Converts phase errors into `CalcError` for `?` propagation.
pub mod error;
/// Orchestrates the evaluation of one line.
///
/// This module ties together validation, lexing, parsing with evaluation, and
/// the interactive shell.
///
/// # Responsibilities
/// - Coordinates the phases for a single input line.
/// - Provides the REPL that repeats them until the exit command.
pub mod interpreter;

/// Evaluates one line of input with permissive parsing.
///
/// Whitespace is stripped first, then the line is validated, tokenized and
/// parsed. Nothing is shared between calls.
///
/// # Errors
/// Returns the first validation, parse or runtime error; no partial result is
/// produced.
///
/// # Examples
/// ```
/// use intcalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20);
/// assert_eq!(evaluate("5---3").unwrap(), 2);
///
/// // Division by zero yields an error instead of a number.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(line: &str) -> CalcResult<i64> {
    evaluate_with(line, ParseMode::Permissive)
}

/// Evaluates one line of input with the given parse mode.
///
/// # Errors
/// Same as [`evaluate`]; strict mode additionally rejects mismatched and
/// trailing tokens.
///
/// # Examples
/// ```
/// use intcalc::{evaluate_with, interpreter::parser::core::ParseMode};
///
/// assert_eq!(evaluate_with("2(3)", ParseMode::Permissive).unwrap(), 2);
/// assert!(evaluate_with("2(3)", ParseMode::Strict).is_err());
/// ```
pub fn evaluate_with(line: &str, mode: ParseMode) -> CalcResult<i64> {
    let text = strip_whitespace(line);
    let parens = validate(&text)?;
    let mut parser = Parser::new(Tokenizer::new(&text), mode, parens)?;
    parser.evaluate()
}
