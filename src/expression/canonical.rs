use std::cmp::Reverse;

use crate::expression::ast::Expression;

impl Expression {
    /// Rewrite into the form used as a deduplication key.
    ///
    /// Nested chains of the same commutative operator are merged into one n-ary
    /// node and its operands are ordered by descending absolute value, then by
    /// rendering, so operand order on input never changes the result. Subtraction
    /// and division keep their operand order and are never merged.
    ///
    /// Applying it to an already canonical expression returns it unchanged.
    pub fn canonicalize(self) -> Expression {
        match self {
            Expression::Number(n) => Expression::Number(n),
            Expression::Neg { value, operand } => Expression::Neg {
                value,
                operand: Box::new(operand.canonicalize()),
            },
            Expression::Apply {
                op,
                value,
                operands,
            } => {
                let mut flattened = Vec::with_capacity(operands.len());
                for operand in operands {
                    match operand.canonicalize() {
                        Expression::Apply {
                            op: inner,
                            operands: nested,
                            ..
                        } if op.is_commutative() && inner == op => flattened.extend(nested),
                        other => flattened.push(other),
                    }
                }

                if op.is_commutative() {
                    flattened.sort_by_cached_key(|operand| {
                        (Reverse(operand.value().unsigned_abs()), operand.render())
                    });
                }

                Expression::Apply {
                    op,
                    value,
                    operands: flattened,
                }
            }
        }
    }
}
