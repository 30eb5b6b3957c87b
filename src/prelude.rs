//! String-based convenience API for quick experimentation.

use crate::error::Result;
use crate::format::solution_summary;

pub use crate::solver::{Solver, SolverConfig, solve, solve_coefficients};

/// Roots of `input`, rendered and comma separated.
pub fn roots(input: &str) -> Result<String> {
    Ok(solve(input)?.formatted)
}

/// Equation, degree and roots of `input` as display lines.
pub fn summary(input: &str) -> Result<Vec<String>> {
    Ok(solution_summary(&solve(input)?))
}
