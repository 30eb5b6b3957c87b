//! Layered root finding: exact rational roots first, closed forms up to cubics for what
//! remains, and a seeded numerical search for higher-degree residuals.

pub mod closed_form;
pub mod config;
pub mod numeric;
pub mod rational;

use tracing::debug;

use crate::error::Result;
use crate::format::format_roots;
use crate::parser::parse_equation;
use crate::polynomial::Polynomial;
use crate::root::{Root, SpecialCase, sort_roots};

pub use config::{ComplexRootStrategy, SolverConfig};
pub use rational::Deflation;

/// Result of solving a textual polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// The input text, trimmed.
    pub equation: String,
    /// Degree after leading zero coefficients are dropped.
    pub degree: usize,
    pub roots: Vec<Root>,
    /// `roots` rendered and joined with `", "`.
    pub formatted: String,
}

impl Solution {
    pub fn has_integer_roots(&self) -> bool {
        self.roots.iter().any(Root::is_integer)
    }

    pub fn real_roots(&self) -> Vec<f64> {
        self.roots.iter().filter_map(Root::as_real).collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Solver { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Parse `text` (a polynomial or an `lhs = rhs` equation) and solve it.
    pub fn solve(&self, text: &str) -> Result<Solution> {
        let poly = parse_equation(text)?;
        debug!(input = text, coefficients = ?poly.coeffs(), "parsed polynomial");
        let degree = poly.normalized().degree();
        let roots = self.solve_polynomial(&poly);
        let formatted = format_roots(&roots);
        debug!(degree, count = roots.len(), roots = %formatted, "solved polynomial");
        Ok(Solution {
            equation: text.trim().to_string(),
            degree,
            roots,
            formatted,
        })
    }

    /// Solve from coefficients ordered from the highest power down to the constant.
    pub fn solve_coefficients(&self, coeffs: &[f64]) -> Vec<Root> {
        self.solve_polynomial(&Polynomial::from(coeffs))
    }

    pub fn solve_polynomial(&self, poly: &Polynomial) -> Vec<Root> {
        if poly.coeffs().iter().any(|c| !c.is_finite()) {
            debug!(coefficients = ?poly.coeffs(), "rejecting non-finite coefficients");
            return vec![Root::Special(SpecialCase::NoValidPolynomial)];
        }

        let poly = poly.normalized();
        if poly.is_empty() {
            return vec![Root::Special(SpecialCase::NoValidPolynomial)];
        }
        if poly.is_zero() {
            debug!("zero polynomial, every value is a root");
            return vec![Root::Special(SpecialCase::InfiniteSolutions)];
        }
        if poly.degree() == 0 {
            return closed_form::solve_constant(poly.leading());
        }

        let Deflation { roots: exact, residual } =
            rational::extract_rational_roots(&poly, &self.config);
        let mut roots: Vec<Root> = exact.into_iter().map(Root::Real).collect();

        let epsilon = self.config.discriminant_epsilon;
        match *residual.coeffs() {
            [] | [_] => {}
            [a, b] => roots.extend(closed_form::solve_linear(a, b)),
            [a, b, c] => roots.extend(closed_form::solve_quadratic(a, b, c, epsilon)),
            [a, b, c, d] => roots.extend(closed_form::solve_cubic(a, b, c, d, epsilon)),
            _ => roots.extend(numeric::solve_numeric(&residual, &self.config)),
        }

        sort_roots(&mut roots);
        roots
    }
}

/// Solve `text` with the default configuration.
pub fn solve(text: &str) -> Result<Solution> {
    Solver::default().solve(text)
}

/// Solve a coefficient vector with the default configuration.
pub fn solve_coefficients(coeffs: &[f64]) -> Vec<Root> {
    Solver::default().solve_coefficients(coeffs)
}
