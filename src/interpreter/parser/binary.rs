use crate::{
    error::CalcResult,
    interpreter::{
        evaluator::{BinaryOperator, apply},
        parser::core::Parser,
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction.
    ///
    /// This is the grammar's entry rule and its lowest precedence level. The
    /// operators are left-associative, so `8-3-2` is `(8-3)-2`.
    ///
    /// The rule is: `term := expression (("+" | "-") expression)*`
    ///
    /// # Errors
    /// Propagates errors from the operands and from the checked arithmetic.
    pub fn term(&mut self) -> CalcResult<i64> {
        let mut result = self.expression()?;
        while let Some(op) = BinaryOperator::additive(&self.current()) {
            self.eat(self.current().kind())?;
            let right = self.expression()?;
            result = apply(op, result, right)?;
        }
        Ok(result)
    }

    /// Parses multiplication and integer division.
    ///
    /// Left-associative and binding tighter than `term`, so `8/4/2` is
    /// `(8/4)/2` and `2+3*4` is `2+(3*4)`.
    ///
    /// The rule is: `expression := paren_factor (("*" | "/") paren_factor)*`
    ///
    /// # Errors
    /// Propagates operand errors; division by zero and overflow come from
    /// [`apply`].
    pub fn expression(&mut self) -> CalcResult<i64> {
        let mut result = self.paren_factor()?;
        while let Some(op) = BinaryOperator::multiplicative(&self.current()) {
            self.eat(self.current().kind())?;
            let right = self.paren_factor()?;
            result = apply(op, result, right)?;
        }
        Ok(result)
    }
}
