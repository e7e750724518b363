use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    /// Fully parenthesised form, e.g. `((24 * 20) + 15 + 10 + -8)`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Neg { operand, .. } => write!(f, "-{}", operand),
            Expression::Apply { op, operands, .. } => {
                write!(f, "(")?;
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", op.symbol())?;
                    }
                    write!(f, "{}", operand)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Expression {
    pub fn render(&self) -> String {
        self.to_string()
    }
}
