//! Countdown - A library for solving the countdown numbers puzzle
//!
//! Given a multiset of positive integers and a target, this library finds every
//! distinct arithmetic expression built from a subset of the numbers (each used at
//! most once) with `+`, `-`, `*` and exact `/` that evaluates to the target.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use solver::{Solver, SolverConfig, SolverError, shortest, verify_solution};
pub use utils::{UtilsError, parse_digits, parse_target_range};

/// Find every distinct expression over `digits` that evaluates to `target`
///
/// This is a convenience function that runs a default solver.
///
/// # Examples
///
/// ```
/// use countdown::{search, shortest};
///
/// let solutions = search(497, &[24, 8, 10, 20, 5, 15]);
/// assert!(!solutions.is_empty());
/// assert!(solutions.iter().all(|s| s.evaluate() == Ok(497)));
///
/// match shortest(&solutions) {
///     Ok(best) => println!("Shortest: {}", best),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn search(target: i64, digits: &[i64]) -> Vec<Expression> {
    Solver::default().search(target, digits)
}

/// Count the solutions for every target in `low..=high` with a default solver
///
/// # Examples
///
/// ```
/// use countdown::count_solutions;
///
/// let counts = count_solutions(8, 10, &[1, 2, 3]);
/// assert_eq!(counts, vec![(8, 1), (9, 1), (10, 0)]);
/// ```
pub fn count_solutions(low: i64, high: i64, digits: &[i64]) -> Vec<(i64, usize)> {
    Solver::default().count_solutions(low, high, digits)
}
