/// The evaluator module holds the integer arithmetic.
///
/// The parser computes values while it parses; every binary step goes through
/// the checked helpers defined here so that division by zero and overflow are
/// reported as errors instead of panicking or wrapping.
///
/// # Responsibilities
/// - Defines the `BinaryOperator` enum and its token mapping.
/// - Performs checked addition, subtraction, multiplication, division and
///   negation.
pub mod evaluator;
/// The lexer module tokenizes a single line for the parser.
///
/// The lexer (tokenizer) walks the whitespace-stripped text and produces
/// tokens on demand: integer literals, the four operators, and parentheses.
/// Runs of `-` are folded by parity.
///
/// # Responsibilities
/// - Converts the character stream into tokens, one at a time.
/// - Reports integer literals that do not fit an `i64`.
/// - Keeps producing `EndOfInput` once the text is exhausted.
pub mod lexer;
/// The parser module evaluates the token stream.
///
/// A recursive-descent parser with one token of lookahead. Each grammar rule
/// returns the value of what it parsed; no syntax tree is built.
///
/// # Responsibilities
/// - Enforces operator precedence and left associativity.
/// - Tracks the parentheses consumed during one evaluation.
/// - Reports unexpected tokens and premature end of input.
pub mod parser;
/// The shell module drives the interactive loop.
///
/// Reads lines from any `BufRead`, evaluates them one by one and writes
/// results or error messages to any `Write`, until the input ends or the exit
/// command is read.
pub mod shell;
/// The validator module rejects malformed lines before tokenization.
///
/// # Responsibilities
/// - Strips whitespace.
/// - Rejects lines that are too short or end with an operator.
/// - Counts parentheses and rejects unbalanced lines.
pub mod validator;
