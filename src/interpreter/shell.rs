use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::{error::CalcError, evaluate_with, interpreter::parser::core::ParseMode};

/// The line that ends the loop without being evaluated.
pub const EXIT_COMMAND: &str = "exit";

/// Banner printed once before the first prompt.
pub const DEFAULT_BANNER: &str = "Enter 'exit' to leave the calculator.";

/// What the shell does after a line fails to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Print the error and read the next line.
    #[default]
    Continue,
    /// Print the error and stop; [`Shell::run`] returns the error.
    Abort,
}

/// Renders a result line: the bare integer, or the label, a space and the
/// integer.
///
/// # Example
/// ```
/// use intcalc::interpreter::shell::format_result;
///
/// assert_eq!(format_result(None, -3), "-3");
/// assert_eq!(format_result(Some("Result:"), 14), "Result: 14");
/// ```
#[must_use]
pub fn format_result(label: Option<&str>, value: i64) -> String {
    match label {
        Some(label) => format!("{label} {value}"),
        None => value.to_string(),
    }
}

/// Settings of one shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Written before every line is read. May be empty.
    pub prompt:   String,
    /// Written once at startup, followed by a newline.
    pub banner:   Option<String>,
    /// Passed to the parser for every line.
    pub mode:     ParseMode,
    /// Whether a failing line ends the session.
    pub on_error: ErrorPolicy,
    /// Printed before each result, separated by a space. Results are bare
    /// integers when unset.
    pub label:    Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { prompt:   "> ".to_string(),
               banner:   Some(DEFAULT_BANNER.to_string()),
               mode:     ParseMode::default(),
               on_error: ErrorPolicy::default(),
               label:    None, }
    }
}

impl ShellConfig {
    /// A configuration that prints nothing but results and errors.
    #[must_use]
    pub fn quiet() -> Self {
        Self { prompt: String::new(),
               banner: None,
               ..Self::default() }
    }
}

/// Counts gathered over one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellSummary {
    /// Lines handed to the evaluator.
    pub evaluated: usize,
    /// Lines whose evaluation failed.
    pub failed:    usize,
}

/// Errors that end a session early.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A line failed while the policy is [`ErrorPolicy::Abort`].
    #[error("line {line}: {source}")]
    Aborted {
        /// One-based number of the failing input line.
        line:   usize,
        #[source]
        source: CalcError,
    },
}

/// A read-evaluate-print loop over any line source and sink.
///
/// Each line is evaluated on its own; nothing carries over from one line to
/// the next.
///
/// # Example
/// ```
/// use intcalc::interpreter::shell::{Shell, ShellConfig};
///
/// let input = "2 + 3 * 4\n5/0\nexit\n7*7\n";
/// let mut shell = Shell::new(input.as_bytes(), Vec::new(), ShellConfig::quiet());
/// let summary = shell.run().unwrap();
///
/// assert_eq!(summary.evaluated, 2);
/// assert_eq!(summary.failed, 1);
/// assert_eq!(String::from_utf8(shell.into_output()).unwrap(),
///            "14\nerror: Division by zero\n");
/// ```
pub struct Shell<R, W> {
    input:  R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell reading lines from `input` and writing to `output`.
    #[must_use]
    pub const fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self { input, output, config }
    }

    /// Consumes the shell and hands back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the loop until end of input or the exit command.
    ///
    /// # Errors
    /// - [`ShellError::Io`] if reading or writing fails.
    /// - [`ShellError::Aborted`] for the first failing line when the policy is
    ///   [`ErrorPolicy::Abort`].
    pub fn run(&mut self) -> Result<ShellSummary, ShellError> {
        let mut summary = ShellSummary::default();
        let mut buffer = Vec::new();
        let mut line_number = 0;

        if let Some(banner) = &self.config.banner {
            writeln!(self.output, "{banner}")?;
        }

        loop {
            if !self.config.prompt.is_empty() {
                write!(self.output, "{}", self.config.prompt)?;
                self.output.flush()?;
            }

            buffer.clear();
            if self.input.read_until(b'\n', &mut buffer)? == 0 {
                log::debug!("end of input after {line_number} line(s)");
                break;
            }
            line_number += 1;

            // Invalid UTF-8 is replaced so the line fails on its own.
            let text = String::from_utf8_lossy(&buffer);
            let line = text.trim_end_matches(['\n', '\r']);
            if line == EXIT_COMMAND {
                log::debug!("exit command on line {line_number}");
                break;
            }

            summary.evaluated += 1;
            match evaluate_with(line, self.config.mode) {
                Ok(value) => {
                    writeln!(self.output, "{}", format_result(self.config.label.as_deref(), value))?;
                },
                Err(error) => {
                    summary.failed += 1;
                    log::debug!("line {line_number} failed: {error:?}");
                    writeln!(self.output, "error: {error}")?;
                    if self.config.on_error == ErrorPolicy::Abort {
                        self.output.flush()?;
                        return Err(ShellError::Aborted { line:   line_number,
                                                         source: error, });
                    }
                },
            }
        }

        self.output.flush()?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, RuntimeError};

    fn run(input: &str, config: ShellConfig) -> (Result<ShellSummary, ShellError>, String) {
        let mut shell = Shell::new(input.as_bytes(), Vec::new(), config);
        let result = shell.run();
        (result, String::from_utf8(shell.into_output()).unwrap())
    }

    #[test]
    fn banner_and_prompts() {
        let (result, output) = run("1+1\n", ShellConfig::default());
        assert_eq!(result.unwrap(), ShellSummary { evaluated: 1, failed: 0 });
        assert_eq!(output, format!("{DEFAULT_BANNER}\n> 2\n> "));
    }

    #[test]
    fn exit_is_not_evaluated() {
        let (result, output) = run("exit\n1+1\n", ShellConfig::quiet());
        assert_eq!(result.unwrap(), ShellSummary::default());
        assert_eq!(output, "");
    }

    #[test]
    fn exit_must_match_exactly() {
        let (result, output) = run(" exit\n", ShellConfig::quiet());
        assert_eq!(result.unwrap(), ShellSummary { evaluated: 1, failed: 1 });
        assert!(output.starts_with("error: "));
    }

    #[test]
    fn invalid_utf8_fails_only_its_line() {
        let mut shell = Shell::new(&b"\xff\xfe\n1+1\n"[..], Vec::new(), ShellConfig::quiet());
        let summary = shell.run().unwrap();
        assert_eq!(summary, ShellSummary { evaluated: 2, failed: 1 });
        let output = String::from_utf8(shell.into_output()).unwrap();
        assert_eq!(output.lines().collect::<Vec<_>>(),
                   ["error: Unexpected end of input: expected integer", "2"]);
    }

    #[test]
    fn windows_line_endings() {
        let (result, output) = run("6*7\r\nexit\r\n", ShellConfig::quiet());
        assert_eq!(result.unwrap().evaluated, 1);
        assert_eq!(output, "42\n");
    }

    #[test]
    fn errors_continue_by_default() {
        let (result, output) = run("5/0\n(2+3\n2 + 3\n", ShellConfig::quiet());
        assert_eq!(result.unwrap(), ShellSummary { evaluated: 3, failed: 2 });
        assert_eq!(output.lines().collect::<Vec<_>>(),
                   ["error: Division by zero",
                    "error: Unbalanced parentheses: 1 '(' against 0 ')'",
                    "5"]);
    }

    #[test]
    fn abort_policy_stops_at_first_error() {
        let config = ShellConfig { on_error: ErrorPolicy::Abort,
                                   ..ShellConfig::quiet() };
        let (result, output) = run("1+1\n1/0\n2+2\n", config);
        match result {
            Err(ShellError::Aborted { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source, CalcError::Runtime(RuntimeError::DivisionByZero));
            },
            other => panic!("expected abort, got {other:?}"),
        }
        assert_eq!(output, "2\nerror: Division by zero\n");
    }

    #[test]
    fn labeled_results() {
        let config = ShellConfig { label: Some("Result:".to_string()),
                                   ..ShellConfig::quiet() };
        let (_, output) = run("10/3\n", config);
        assert_eq!(output, "Result: 3\n");
    }

    #[test]
    fn strict_mode_is_applied() {
        let config = ShellConfig { mode: ParseMode::Strict,
                                   on_error: ErrorPolicy::Abort,
                                   ..ShellConfig::quiet() };
        let (result, _) = run("2(3)\n", config);
        assert!(matches!(result,
                         Err(ShellError::Aborted { source:
                                                       CalcError::Parse(ParseError::UnexpectedToken { .. }),
                                                   .. })));
    }
}
