//! Polynomial root finding for single-variable polynomials given as text or coefficients.
//!
//! Roots are found in layers: exact rational roots through the Rational Root Theorem,
//! closed forms for the deflated remainder up to degree three, and a seeded
//! Newton-Raphson search beyond that.

pub mod error;
pub mod format;
pub mod parser;
pub mod polynomial;
pub mod prelude;
pub mod root;
pub mod solver;

#[cfg(test)]
mod proptests;

pub use error::{Result, RootError};
pub use format::{format_root, format_roots, solution_summary};
pub use parser::{parse_equation, parse_polynomial};
pub use polynomial::Polynomial;
pub use root::{Root, SpecialCase, sort_roots};
pub use solver::{
    ComplexRootStrategy, Deflation, Solution, Solver, SolverConfig, solve, solve_coefficients,
};
