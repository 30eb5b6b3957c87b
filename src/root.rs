//! Root values produced by the solver and their ordering.

use std::cmp::Ordering;
use std::fmt;

use num_complex::Complex64;

/// Outcomes for polynomials that have no finite root set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialCase {
    NoSolution,
    InfiniteSolutions,
    NoValidPolynomial,
}

impl SpecialCase {
    pub fn label(self) -> &'static str {
        match self {
            SpecialCase::NoSolution => "No solution",
            SpecialCase::InfiniteSolutions => "Infinite solutions",
            SpecialCase::NoValidPolynomial => "No valid polynomial",
        }
    }
}

impl fmt::Display for SpecialCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Root {
    Real(f64),
    Complex(Complex64),
    /// A complex root the numerical stage counted but did not compute.
    /// `pair` numbers conjugate pairs from 1.
    Unresolved {
        pair: usize,
        conjugate: bool,
    },
    Special(SpecialCase),
}

impl Root {
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Root::Real(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex64> {
        match self {
            Root::Real(x) => Some(Complex64::new(*x, 0.0)),
            Root::Complex(z) => Some(*z),
            _ => None,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Root::Real(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Root::Real(x) if (x - x.round()).abs() < 1e-10)
    }
}

impl From<f64> for Root {
    fn from(value: f64) -> Self {
        Root::Real(value)
    }
}

impl From<Complex64> for Root {
    fn from(value: Complex64) -> Self {
        Root::Complex(value)
    }
}

impl From<SpecialCase> for Root {
    fn from(value: SpecialCase) -> Self {
        Root::Special(value)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format_root(self))
    }
}

/// Order real roots ascending, followed by every other root in the order it was produced.
pub fn sort_roots(roots: &mut [Root]) {
    roots.sort_by(compare_roots);
}

fn compare_roots(a: &Root, b: &Root) -> Ordering {
    match (a.as_real(), b.as_real()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
