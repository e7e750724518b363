//! Expression trees: construction, evaluation, rendering and canonical form

mod ast;
mod canonical;
mod display;
mod errors;
mod eval;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;
