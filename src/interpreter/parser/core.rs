use crate::{
    error::{CalcResult, ParseError},
    interpreter::{
        lexer::{Token, TokenKind, Tokenizer},
        validator::ParenCount,
    },
};

/// Result type used by the tokenizer, the validator and the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on nested parentheses.
pub const MAX_NESTING_DEPTH: usize = 256;

/// How the parser reacts to tokens it did not expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// A mismatched token is left in place and parsing goes on; anything after
    /// the outermost expression is ignored. Only running out of input while a
    /// token is expected is an error.
    #[default]
    Permissive,
    /// Every mismatch, and every token after the outermost expression, fails
    /// with [`ParseError::UnexpectedToken`].
    Strict,
}

/// A recursive-descent parser that evaluates while it parses.
///
/// There is no syntax tree: every grammar rule returns the value of the text
/// it consumed. Exactly one token is buffered as the lookahead at all times,
/// and there is no backtracking.
///
/// ```text
/// term        := expression ( ('+'|'-') expression )*
/// expression  := paren_factor ( ('*'|'/') paren_factor )*
/// paren_factor:= ('+'|'-')* ( '(' term ')' | factor )
/// factor      := INTEGER
/// ```
///
/// Recursion only happens on `(`, so the call depth follows the nesting of
/// parentheses, which is capped by the nesting limit.
pub struct Parser<'src> {
    tokenizer:     Tokenizer<'src>,
    current:       Token,
    mode:          ParseMode,
    source_parens: ParenCount,
    parens:        ParenCount,
    depth:         usize,
    nesting_limit: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and buffers the first token of `tokenizer`.
    ///
    /// `source_parens` are the parentheses counted over the whole line before
    /// tokenization; they are checked again once parsing is done.
    ///
    /// # Errors
    /// Fails if the first token is an oversized integer literal.
    pub fn new(mut tokenizer: Tokenizer<'src>,
               mode: ParseMode,
               source_parens: ParenCount)
               -> ParseResult<Self> {
        let current = tokenizer.next_token()?;
        Ok(Self { tokenizer,
                  current,
                  mode,
                  source_parens,
                  parens: ParenCount::default(),
                  depth: 0,
                  nesting_limit: MAX_NESTING_DEPTH })
    }

    /// Replaces the limit on nested parentheses.
    #[must_use]
    pub const fn with_nesting_limit(mut self, limit: usize) -> Self {
        self.nesting_limit = limit;
        self
    }

    /// Enters one level of parentheses.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] past the nesting limit.
    pub(crate) fn enter_group(&mut self) -> ParseResult<()> {
        if self.depth >= self.nesting_limit {
            return Err(ParseError::NestingTooDeep { limit:    self.nesting_limit,
                                                    position: self.position(), });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level of parentheses.
    pub(crate) fn leave_group(&mut self) {
        self.depth -= 1;
    }

    /// The buffered lookahead token.
    #[must_use]
    pub const fn current(&self) -> Token {
        self.current
    }

    /// Byte offset of the lookahead token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.tokenizer.offset()
    }

    /// Parentheses consumed so far by this parser.
    #[must_use]
    pub const fn parentheses(&self) -> ParenCount {
        self.parens
    }

    /// Consumes the lookahead if it has the `expected` kind.
    ///
    /// On a match the next token is pulled from the tokenizer. On a mismatch
    /// the behavior depends on the [`ParseMode`]: permissive parsing leaves the
    /// lookahead untouched, strict parsing fails. Hitting the end of input
    /// while something concrete is expected always fails.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedEndOfInput`] when the lookahead is
    ///   `EndOfInput`.
    /// - [`ParseError::UnexpectedToken`] on any other mismatch in strict mode.
    /// - [`ParseError::NumericOverflow`] when the next literal is oversized.
    pub fn eat(&mut self, expected: TokenKind) -> ParseResult<()> {
        let found = self.current.kind();
        if found == expected {
            match expected {
                TokenKind::LParen => self.parens.open += 1,
                TokenKind::RParen => self.parens.close += 1,
                _ => {},
            }
            self.current = self.tokenizer.next_token()?;
            return Ok(());
        }

        match (found, self.mode) {
            (TokenKind::EndOfInput, _) => Err(ParseError::UnexpectedEndOfInput { expected }),
            (_, ParseMode::Strict) => Err(ParseError::UnexpectedToken { token:    found,
                                                                        position: self.position(), }),
            (_, ParseMode::Permissive) => {
                log::debug!("expected '{expected}' but found '{found}' at {}, continuing",
                            self.position());
                Ok(())
            },
        }
    }

    /// Parses and evaluates the whole line.
    ///
    /// After the outermost `term` returns, the parentheses counted over the
    /// line must balance. In strict mode the lookahead must also be
    /// `EndOfInput`, and the parentheses consumed by the parser must balance
    /// as well.
    ///
    /// # Errors
    /// Any parse or runtime error raised by the grammar rules, plus
    /// [`ParseError::UnbalancedParentheses`] and, in strict mode,
    /// [`ParseError::UnexpectedToken`] for trailing tokens.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::{
    ///     lexer::Tokenizer,
    ///     parser::core::{ParseMode, Parser},
    ///     validator::count_parentheses,
    /// };
    ///
    /// let text = "(2+3)*4";
    /// let mut parser =
    ///     Parser::new(Tokenizer::new(text), ParseMode::Permissive, count_parentheses(text)).unwrap();
    /// assert_eq!(parser.evaluate().unwrap(), 20);
    /// ```
    pub fn evaluate(&mut self) -> CalcResult<i64> {
        let value = self.term()?;

        if self.mode == ParseMode::Strict && self.current != Token::EndOfInput {
            return Err(ParseError::UnexpectedToken { token:    self.current.kind(),
                                                     position: self.position(), }.into());
        }
        if self.current != Token::EndOfInput {
            log::debug!("ignoring trailing input from {}", self.position());
        }

        self.source_parens.check()?;
        if self.mode == ParseMode::Strict {
            self.parens.check()?;
        }
        log::trace!("evaluated to {value}");
        Ok(value)
    }
}
