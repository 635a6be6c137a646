/// Parser state and token consumption.
///
/// Holds the [`core::Parser`] with its single lookahead token, the `eat`
/// primitive, the parenthesis counters of one evaluation and the top-level
/// `evaluate` entry point.
pub mod core;

/// Binary operator rules.
///
/// Implements the two left-associative precedence levels: `term` for `+`/`-`
/// and `expression` for `*`/`/`.
pub mod binary;

/// Operand rules.
///
/// Implements grouping, signs and integer literals.
pub mod factor;
