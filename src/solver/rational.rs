//! Rational Root Theorem search with deflation by synthetic division.

use std::collections::BTreeSet;

use num_integer::Integer;
use num_rational::Rational64;
use num_traits::ToPrimitive;
use tracing::{debug, trace};

use super::config::SolverConfig;
use crate::polynomial::Polynomial;

const MAX_DECIMAL_SCALE: i32 = 6;

/// Rational roots pulled out of a polynomial together with what is left of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Deflation {
    /// Extracted roots, each repeated by its multiplicity.
    pub roots: Vec<f64>,
    pub residual: Polynomial,
}

/// Extract every rational root with its multiplicity, deflating as it goes.
pub fn extract_rational_roots(poly: &Polynomial, config: &SolverConfig) -> Deflation {
    let (zeros, mut working) = poly.strip_zero_roots();
    let mut roots = vec![0.0; zeros];

    for root in find_rational_roots(&working, config) {
        let mut multiplicity = 0;
        while working.degree() > 0 {
            let (quotient, remainder) = working.synthetic_divide(root);
            if remainder.abs() >= config.root_tolerance {
                break;
            }
            working = quotient;
            multiplicity += 1;
        }
        trace!(root, multiplicity, "deflated rational root");
        roots.extend(std::iter::repeat(root).take(multiplicity));
    }

    debug!(
        found = roots.len(),
        residual_degree = working.degree(),
        "rational root extraction finished"
    );
    Deflation {
        roots,
        residual: working,
    }
}

/// Distinct rational roots of `poly`, ascending.
pub fn find_rational_roots(poly: &Polynomial, config: &SolverConfig) -> Vec<f64> {
    if poly.degree() == 0 {
        return Vec::new();
    }
    if poly.constant_term() == 0.0 {
        return vec![0.0];
    }
    rational_candidates(poly, config.max_factor_search)
        .into_iter()
        .filter_map(|candidate| candidate.to_f64())
        .filter(|x| poly.evaluate(*x).abs() < config.root_tolerance)
        .collect()
}

/// Every `±p/q` with `p` dividing the constant term and `q` the leading coefficient,
/// deduplicated and ascending.
///
/// Empty when the coefficients have no integer form or a coefficient to factor exceeds
/// `limit`.
pub fn rational_candidates(poly: &Polynomial, limit: u64) -> Vec<Rational64> {
    let Some(ints) = integer_form(poly) else {
        debug!("coefficients have no integer form, skipping rational search");
        return Vec::new();
    };
    let (Some(&leading), Some(&constant)) = (ints.first(), ints.last()) else {
        return Vec::new();
    };
    let (leading, constant) = (leading.unsigned_abs(), constant.unsigned_abs());
    if leading == 0 || constant == 0 {
        return Vec::new();
    }
    if leading > limit || constant > limit {
        debug!(leading, constant, limit, "coefficients too large to factor");
        return Vec::new();
    }

    let p_candidates = divisors(constant);
    let q_candidates = divisors(leading);
    let mut candidates = BTreeSet::new();
    for &p in &p_candidates {
        for &q in &q_candidates {
            let (Ok(p), Ok(q)) = (i64::try_from(p), i64::try_from(q)) else {
                continue;
            };
            let candidate = Rational64::new(p, q);
            candidates.insert(candidate);
            candidates.insert(-candidate);
        }
    }
    candidates.into_iter().collect()
}

/// Positive divisors of `n`, ascending. Trial division up to `sqrt(n)`.
pub fn divisors(n: u64) -> Vec<u64> {
    let mut result = Vec::new();
    if n == 0 {
        return result;
    }
    let mut d = 1u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            result.push(d);
            let other = n / d;
            if other != d {
                result.push(other);
            }
        }
        d += 1;
    }
    result.sort_unstable();
    result
}

/// Scale decimal coefficients to integers and divide out their content.
fn integer_form(poly: &Polynomial) -> Option<Vec<i64>> {
    let coeffs = poly.coeffs();
    let scaled = (0..=MAX_DECIMAL_SCALE).find_map(|exp| {
        let factor = 10f64.powi(exp);
        coeffs
            .iter()
            .map(|c| as_integer(c * factor))
            .collect::<Option<Vec<i64>>>()
    })?;

    let content = scaled.iter().fold(0i64, |acc, c| acc.gcd(c));
    if content <= 1 {
        return Some(scaled);
    }
    Some(scaled.into_iter().map(|c| c / content).collect())
}

fn as_integer(value: f64) -> Option<i64> {
    if !value.is_finite() || value.abs() >= 9.0e15 {
        return None;
    }
    let rounded = value.round();
    let tolerance = 16.0 * f64::EPSILON * value.abs().max(1.0);
    ((value - rounded).abs() <= tolerance).then_some(rounded as i64)
}
