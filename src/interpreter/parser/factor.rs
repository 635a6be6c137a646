use crate::{
    error::{CalcResult, ParseError},
    interpreter::{
        evaluator::negate,
        lexer::{Token, TokenKind},
        parser::core::Parser,
    },
};

impl Parser<'_> {
    /// Parses a parenthesized group or a literal, with any leading signs.
    ///
    /// A `+` or `-` in operand position is a sign. Signs are folded in a loop
    /// and applied once, so a long sign chain does not deepen the call stack.
    /// Because the tokenizer folds minus runs, `--5` arrives here as `+5`.
    ///
    /// The rule is: `paren_factor := ("+" | "-")* ("(" term ")" | factor)`
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedEndOfInput`] when the group is not closed.
    /// - [`ParseError::NestingTooDeep`] past the nesting limit.
    /// - Any error from the nested rules.
    pub fn paren_factor(&mut self) -> CalcResult<i64> {
        let mut negative = false;
        loop {
            match self.current() {
                Token::Plus => self.eat(TokenKind::Plus)?,
                Token::Minus => {
                    self.eat(TokenKind::Minus)?;
                    negative = !negative;
                },
                _ => break,
            }
        }

        let value = if self.current() == Token::LParen {
            self.enter_group()?;
            self.eat(TokenKind::LParen)?;
            let value = self.term()?;
            self.eat(TokenKind::RParen)?;
            self.leave_group();
            value
        } else {
            self.factor()?
        };

        if negative { Ok(negate(value)?) } else { Ok(value) }
    }

    /// Parses an integer literal.
    ///
    /// The rule is: `factor := INTEGER`
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedEndOfInput`] when no token is left.
    /// - [`ParseError::UnexpectedToken`] for any other non-integer token.
    pub fn factor(&mut self) -> CalcResult<i64> {
        match self.current() {
            Token::Integer(value) => {
                self.eat(TokenKind::Integer)?;
                Ok(value)
            },
            Token::EndOfInput => {
                Err(ParseError::UnexpectedEndOfInput { expected: TokenKind::Integer }.into())
            },
            token => Err(ParseError::UnexpectedToken { token:    token.kind(),
                                                       position: self.position(), }.into()),
        }
    }
}
