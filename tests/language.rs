use std::fs;

use intcalc::{
    error::{CalcError, ParseError, RuntimeError},
    evaluate, evaluate_with,
    interpreter::{
        lexer::TokenKind,
        parser::core::{MAX_NESTING_DEPTH, ParseMode},
    },
};
use walkdir::WalkDir;

#[test]
fn script_cases_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (number, input, expected) in extract_cases(&content) {
            count += 1;
            let result = evaluate(input);
            match expected {
                Some(value) => assert_eq!(result,
                                          Ok(value),
                                          "{path:?}:{number}: `{input}` should be {value}"),
                None => assert!(result.is_err(),
                                "{path:?}:{number}: `{input}` should fail, got {result:?}"),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/scripts");
}

/// Splits `input => expected` lines; `expected` is an integer or `error`.
fn extract_cases(content: &str) -> Vec<(usize, &str, Option<i64>)> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|(i, line)| {
               let (input, expected) =
                   line.rsplit_once("=>")
                       .unwrap_or_else(|| panic!("line {} has no '=>': {line}", i + 1));
               let expected = expected.trim();
               let expected = if expected == "error" {
                   None
               } else {
                   Some(expected.parse()
                                .unwrap_or_else(|_| panic!("bad expectation on line {}", i + 1)))
               };
               (i + 1, input.trim(), expected)
           })
           .collect()
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "`{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_error(src: &str, expected: impl Into<CalcError>) {
    assert_eq!(evaluate(src), Err(expected.into()), "`{src}`");
}

#[test]
fn precedence() {
    assert_value("2+3*4", 14);
    assert_value("(2+3)*4", 20);
    assert_value("2*(3+4)*5", 70);
}

#[test]
fn left_associativity() {
    assert_value("8-3-2", 3);
    assert_value("8/4/2", 1);
}

#[test]
fn truncating_division() {
    assert_value("7/2", 3);
    assert_value("-7/2", -3);
    assert_value("7/-2", -3);
}

#[test]
fn minus_run_parity() {
    assert_value("5--3", 8);
    assert_value("5---3", 2);
    assert_value("5----3", 8);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(evaluate("2 + 3"), evaluate("2+3"));
    assert_value("  ( 1 +\t2 ) * 3 ", 9);
    assert_value("5 - - 3", 8);
}

#[test]
fn division_by_zero_is_error() {
    assert_error("5/0", RuntimeError::DivisionByZero);
    assert_error("1/(2-2)", RuntimeError::DivisionByZero);
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert_error("(2+3", ParseError::UnbalancedParentheses { open: 1, close: 0 });
    assert_error("2+3)", ParseError::UnbalancedParentheses { open: 0, close: 1 });
}

#[test]
fn validation_errors() {
    assert_error("", ParseError::InputTooShort { length: 0 });
    assert_error(" 7 ", ParseError::InputTooShort { length: 1 });
    assert_error("1 +", ParseError::TrailingOperator { operator: '+' });
    assert_error("4*2/", ParseError::TrailingOperator { operator: '/' });
}

#[test]
fn parse_errors() {
    assert_error("2+*3", ParseError::UnexpectedToken { token:    TokenKind::Multiply,
                                                       position: 2, });
    assert_error("(1+2)(", ParseError::UnbalancedParentheses { open: 2, close: 1 });
    assert_error("()", ParseError::UnexpectedToken { token:    TokenKind::RParen,
                                                     position: 1, });
    assert_error("(x)", ParseError::UnexpectedEndOfInput { expected: TokenKind::Integer });
}

#[test]
fn numeric_limits() {
    assert_value("9223372036854775807", i64::MAX);
    assert_value("-9223372036854775807-1", i64::MIN);
    assert_error("9223372036854775808",
                 ParseError::NumericOverflow { literal:  "9223372036854775808".to_string(),
                                               position: 0, });
    assert!(matches!(evaluate("9223372036854775807+1"),
                     Err(CalcError::Runtime(RuntimeError::Overflow { .. }))));
}

#[test]
fn trailing_input_is_ignored_unless_strict() {
    assert_value("12)+(3", 12);
    assert_eq!(evaluate_with("2(3)", ParseMode::Permissive), Ok(2));
    assert!(evaluate_with("2(3)", ParseMode::Strict).is_err());
    assert_eq!(evaluate_with("(1+2)*3", ParseMode::Strict), Ok(9));
}

#[test]
fn repeated_evaluation_shares_no_state() {
    assert!(evaluate("((1)").is_err());
    assert_value("(1)+1", 2);
    assert_value("(1)+1", 2);
}

#[test]
fn long_sign_chain_evaluates() {
    let line = format!("{}1", "-+".repeat(50_000));
    assert_value(&line, 1);
    assert_value(&format!("-{line}"), -1);
}

#[test]
fn deep_nesting_is_error() {
    let depth = 200_000;
    let line = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_error(&line,
                 ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                              position: MAX_NESTING_DEPTH, });
    let line = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert_value(&line, 1);
}

#[test]
fn balanced_line_with_skipped_group() {
    assert_value("(2(3))", 2);
    assert_eq!(evaluate_with("(2(3))", ParseMode::Strict),
               Err(ParseError::UnexpectedToken { token:    TokenKind::LParen,
                                                 position: 2, }.into()));
}
