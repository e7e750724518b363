use log::{debug, trace};

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

impl Operator {
    /// # Errors
    ///
    /// Returns an error when the combination is not allowed:
    /// - Subtraction that would not leave a positive result
    /// - Division by zero, or division that leaves a remainder
    /// - Any result outside the `i64` range
    pub fn apply(self, left: i64, right: i64) -> Result<i64, ExpressionError> {
        match self {
            Operator::Add => left.checked_add(right).ok_or(ExpressionError::Overflow),
            Operator::Subtract => {
                if left > right {
                    left.checked_sub(right).ok_or(ExpressionError::Overflow)
                } else {
                    Err(ExpressionError::NonPositiveDifference(left, right))
                }
            }
            Operator::Multiply => left.checked_mul(right).ok_or(ExpressionError::Overflow),
            Operator::Divide => {
                if right == 0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                let remainder = left
                    .checked_rem(right)
                    .ok_or(ExpressionError::Overflow)?;
                if remainder != 0 {
                    return Err(ExpressionError::InexactDivision(left, right));
                }
                left.checked_div(right).ok_or(ExpressionError::Overflow)
            }
        }
    }
}

impl Expression {
    pub fn number(value: i64) -> Self {
        Expression::Number(value)
    }

    /// Build `left op right`, computing its value up front
    ///
    /// # Errors
    ///
    /// Returns the reason the operator rejects the operand values; no node is built.
    pub fn combine(
        op: Operator,
        left: Expression,
        right: Expression,
    ) -> Result<Self, ExpressionError> {
        let value = op.apply(left.value(), right.value())?;
        Ok(Expression::Apply {
            op,
            value,
            operands: vec![left, right],
        })
    }

    /// # Errors
    ///
    /// Returns an error if the negated value does not fit in an `i64`.
    pub fn negate(operand: Expression) -> Result<Self, ExpressionError> {
        let value = operand
            .value()
            .checked_neg()
            .ok_or(ExpressionError::Overflow)?;
        Ok(Expression::Neg {
            value,
            operand: Box::new(operand),
        })
    }

    /// Recompute the value bottom-up and check it against every stored value
    ///
    /// # Errors
    ///
    /// Returns an error if any node breaks an arithmetic rule, has too few
    /// operands, or stores a value different from its recomputed one.
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        let result = self.recompute();
        if let Err(e) = &result {
            debug!("Expression evaluation failed for {}: {}", self, e);
        }
        result
    }

    fn recompute(&self) -> Result<i64, ExpressionError> {
        let evaluated = match self {
            Expression::Number(n) => *n,
            Expression::Neg { operand, .. } => operand
                .recompute()?
                .checked_neg()
                .ok_or(ExpressionError::Overflow)?,
            Expression::Apply { op, operands, .. } => {
                let (first, rest) = match operands.split_first() {
                    Some((first, rest)) if !rest.is_empty() => (first, rest),
                    _ => {
                        return Err(ExpressionError::ArityMismatch {
                            op: *op,
                            count: operands.len(),
                        });
                    }
                };
                let mut acc = first.recompute()?;
                for operand in rest {
                    acc = op.apply(acc, operand.recompute()?)?;
                }
                acc
            }
        };

        let stored = self.value();
        if stored != evaluated {
            trace!("Stored value {} but evaluated {}", stored, evaluated);
            return Err(ExpressionError::ValueMismatch { stored, evaluated });
        }
        Ok(evaluated)
    }
}
