use thiserror::Error;

use crate::expression::ast::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Subtraction {0} - {1} does not give a positive result")]
    NonPositiveDifference(i64, i64),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division {0} / {1} is not exact")]
    InexactDivision(i64, i64),
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Operator '{}' needs at least 2 operands, got {count}", .op.symbol())]
    ArityMismatch { op: Operator, count: usize },
    #[error("Stored value {stored} disagrees with evaluated value {evaluated}")]
    ValueMismatch { stored: i64, evaluated: i64 },
}
