use std::collections::HashSet;

use log::{debug, info, trace};
use rayon::prelude::*;

use crate::expression::{Expression, ExpressionError, Operator};
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;

/// Main solver for finding every expression over a digit multiset that hits a target
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a new solver with the given configuration
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find every distinct expression over a subset of `digits` equal to `target`.
    ///
    /// Each digit position is used at most once per expression. Results are in
    /// canonical form, unique by rendering, and in discovery order. An empty
    /// result means there is no solution.
    pub fn search(&self, target: i64, digits: &[i64]) -> Vec<Expression> {
        info!("Searching for {} using digits {:?}", target, digits);

        let solutions = if self.config.parallel {
            // Collected in position order so the output matches the sequential run
            let per_digit: Vec<Vec<Expression>> = (0..digits.len())
                .into_par_iter()
                .map(|index| candidates_using(target, digits, index))
                .collect();
            deduplicate(target, per_digit.into_iter().flatten())
        } else {
            solve(target, digits)
        };

        info!("Found {} solutions for {}", solutions.len(), target);
        solutions
    }

    /// Count the solutions for every target in `low..=high`.
    ///
    /// Expressions are dropped as soon as they are counted. An inverted range
    /// yields an empty result.
    pub fn count_solutions(&self, low: i64, high: i64, digits: &[i64]) -> Vec<(i64, usize)> {
        info!(
            "Counting solutions for targets {}..={} using digits {:?}",
            low, high, digits
        );

        if low > high {
            debug!("Empty target range {}..={}", low, high);
            return Vec::new();
        }

        let counts: Vec<(i64, usize)> = if self.config.parallel {
            (low..=high)
                .into_par_iter()
                .map(|target| (target, solve(target, digits).len()))
                .collect()
        } else {
            (low..=high)
                .map(|target| (target, solve(target, digits).len()))
                .collect()
        };

        info!("Finished sweep over {} targets", counts.len());
        counts
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Pick the solution with the shortest rendering; ties go to the earliest one.
///
/// # Errors
///
/// Returns [`SolverError::NoSolutions`] when `solutions` is empty.
pub fn shortest(solutions: &[Expression]) -> Result<&Expression, SolverError> {
    let mut best: Option<&Expression> = None;
    let mut best_len = usize::MAX;
    for solution in solutions {
        let len = solution.render().len();
        if len < best_len {
            best = Some(solution);
            best_len = len;
        }
    }
    best.ok_or(SolverError::NoSolutions)
}

/// Re-evaluate a solution from scratch and check it hits `target`.
///
/// # Errors
///
/// Returns an error if evaluation fails or produces a different value.
pub fn verify_solution(solution: &Expression, target: i64) -> Result<i64, SolverError> {
    let actual = solution.evaluate()?;
    if actual != target {
        return Err(SolverError::IncorrectSolution {
            rendered: solution.render(),
            actual,
            expected: target,
        });
    }
    Ok(actual)
}

fn solve(target: i64, digits: &[i64]) -> Vec<Expression> {
    let candidates =
        (0..digits.len()).flat_map(|index| candidates_using(target, digits, index));
    deduplicate(target, candidates)
}

/// All raw solutions of the form `digits[index] op rest` or `rest op digits[index]`.
///
/// `rest` is a fresh copy without `index`, so sibling branches never see each
/// other's digits.
fn candidates_using(target: i64, digits: &[i64], index: usize) -> Vec<Expression> {
    let mut out = Vec::new();
    let Some(&a) = digits.get(index) else {
        return out;
    };

    if a == target {
        out.push(Expression::number(a));
    }

    let rest: Vec<i64> = digits
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, &d)| d)
        .collect();

    // a + r
    if target > a
        && let Some(sub) = target.checked_sub(a)
    {
        extend_with(&mut out, sub, &rest, |r| {
            Expression::combine(Operator::Add, Expression::number(a), r)
        });
    }

    // a - r
    if a > target
        && let Some(sub) = a.checked_sub(target)
    {
        extend_with(&mut out, sub, &rest, |r| {
            let negated = Expression::negate(r)?;
            Expression::combine(Operator::Add, Expression::number(a), negated)
        });
    }

    // r - a
    if let Some(sub) = target.checked_add(a) {
        extend_with(&mut out, sub, &rest, |r| {
            let negated = Expression::negate(Expression::number(a))?;
            Expression::combine(Operator::Add, r, negated)
        });
    }

    // a * r
    if let Some(sub) = exact_quotient(target, a) {
        extend_with(&mut out, sub, &rest, |r| {
            Expression::combine(Operator::Multiply, Expression::number(a), r)
        });
    }

    // a / r
    if let Some(sub) = exact_quotient(a, target) {
        extend_with(&mut out, sub, &rest, |r| {
            Expression::combine(Operator::Divide, Expression::number(a), r)
        });
    }

    // r / a
    if a != 0
        && let Some(sub) = target.checked_mul(a)
    {
        extend_with(&mut out, sub, &rest, |r| {
            Expression::combine(Operator::Divide, r, Expression::number(a))
        });
    }

    out
}

fn extend_with<F>(out: &mut Vec<Expression>, sub_target: i64, rest: &[i64], build: F)
where
    F: Fn(Expression) -> Result<Expression, ExpressionError>,
{
    for partial in solve(sub_target, rest) {
        match build(partial) {
            Ok(expr) => out.push(expr),
            Err(e) => trace!("Pruned combination for sub-target {}: {}", sub_target, e),
        }
    }
}

fn exact_quotient(dividend: i64, divisor: i64) -> Option<i64> {
    if divisor == 0 || dividend.checked_rem(divisor)? != 0 {
        return None;
    }
    dividend.checked_div(divisor)
}

/// Canonicalize each candidate and keep the first of every distinct rendering
fn deduplicate<I>(target: i64, candidates: I) -> Vec<Expression>
where
    I: IntoIterator<Item = Expression>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    let mut total = 0usize;

    for candidate in candidates {
        total += 1;
        assert_eq!(
            candidate.value(),
            target,
            "generated invalid solution: {}",
            candidate
        );

        let canonical = candidate.canonicalize();
        if seen.insert(canonical.render()) {
            unique.push(canonical);
        }
    }

    debug!(
        "Target {}: {} candidates, {} unique",
        target,
        total,
        unique.len()
    );
    unique
}
