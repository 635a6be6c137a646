use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// The shortest stripped line that is evaluated at all.
pub const MIN_LENGTH: usize = 2;

/// Operators a line may not end with.
pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Counts of opening and closing parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParenCount {
    /// Number of `(` seen.
    pub open:  usize,
    /// Number of `)` seen.
    pub close: usize,
}

impl ParenCount {
    /// Returns `true` when both counts are equal.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.open == self.close
    }

    /// Fails with [`ParseError::UnbalancedParentheses`] unless balanced.
    ///
    /// # Errors
    /// Returns the counts in the error when they differ.
    pub const fn check(&self) -> ParseResult<()> {
        if self.is_balanced() {
            Ok(())
        } else {
            Err(ParseError::UnbalancedParentheses { open:  self.open,
                                                    close: self.close, })
        }
    }
}

/// Removes every whitespace character from `text`.
///
/// # Example
/// ```
/// use intcalc::interpreter::validator::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" 2 +\t3 "), "2+3");
/// ```
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Rejects lines with fewer than [`MIN_LENGTH`] characters.
///
/// Only empty and single-character lines are rejected; `1+` passes here and is
/// caught by [`check_trailing_operator`].
///
/// # Errors
/// Returns [`ParseError::InputTooShort`].
pub fn min_length(text: &str) -> ParseResult<()> {
    let length = text.chars().count();
    if length < MIN_LENGTH {
        return Err(ParseError::InputTooShort { length });
    }
    Ok(())
}

/// Rejects lines whose last character is one of `+ - * /`.
///
/// The first character is not inspected, so `-5+2` is accepted.
///
/// # Errors
/// Returns [`ParseError::TrailingOperator`].
pub fn check_trailing_operator(text: &str) -> ParseResult<()> {
    match text.chars().next_back() {
        Some(operator) if OPERATORS.contains(&operator) => {
            Err(ParseError::TrailingOperator { operator })
        },
        _ => Ok(()),
    }
}

/// Counts the parentheses of the whole line.
#[must_use]
pub fn count_parentheses(text: &str) -> ParenCount {
    text.chars().fold(ParenCount::default(), |mut count, c| {
                    match c {
                        '(' => count.open += 1,
                        ')' => count.close += 1,
                        _ => {},
                    }
                    count
                })
}

/// Runs every check that happens before tokenization.
///
/// The checks run in order: minimum length, trailing operator, parenthesis
/// balance. The parenthesis counts are returned on success.
///
/// # Errors
/// Returns the first failing check's error.
///
/// # Example
/// ```
/// use intcalc::{error::ParseError, interpreter::validator::validate};
///
/// assert!(validate("(1+2)*3").is_ok());
/// assert_eq!(validate("(2+3"),
///            Err(ParseError::UnbalancedParentheses { open: 1, close: 0 }));
/// ```
pub fn validate(text: &str) -> ParseResult<ParenCount> {
    min_length(text)?;
    check_trailing_operator(text)?;
    let count = count_parentheses(text);
    count.check()?;
    Ok(count)
}
