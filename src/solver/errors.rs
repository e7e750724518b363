use thiserror::Error;

use crate::expression::ExpressionError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("No solutions")]
    NoSolutions,
    #[error("Generated incorrect solution: {rendered} = {actual}, want {expected}")]
    IncorrectSolution {
        rendered: String,
        actual: i64,
        expected: i64,
    },
    #[error("Expression evaluation error: {0}")]
    ExpressionError(#[from] ExpressionError),
}
