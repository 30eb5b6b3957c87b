//! Dense univariate polynomials over `f64`, stored highest degree first.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    pub(crate) coeffs: Vec<f64>,
}

impl Polynomial {
    /// Build a polynomial from coefficients ordered from the highest power down to the constant.
    pub fn new(coeffs: Vec<f64>) -> Self {
        Polynomial { coeffs }
    }

    pub fn zero() -> Self {
        Polynomial { coeffs: vec![0.0] }
    }

    pub fn constant(c: f64) -> Self {
        Polynomial { coeffs: vec![c] }
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<f64> {
        self.coeffs
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree implied by the vector length. Leading zeros are counted, call
    /// [`Polynomial::normalized`] first when the effective degree matters.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    pub fn leading(&self) -> f64 {
        self.coeffs.first().copied().unwrap_or(0.0)
    }

    pub fn constant_term(&self) -> f64 {
        self.coeffs.last().copied().unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| *c == 0.0)
    }

    /// Strip leading zero coefficients, keeping at least one entry.
    pub fn normalized(&self) -> Self {
        let first_nonzero = self
            .coeffs
            .iter()
            .position(|c| *c != 0.0)
            .unwrap_or_else(|| self.coeffs.len().saturating_sub(1));
        Polynomial {
            coeffs: self.coeffs[first_nonzero..].to_vec(),
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, c| acc * x + c)
    }

    pub fn derivative(&self) -> Self {
        let degree = self.degree();
        if degree == 0 {
            return Polynomial::zero();
        }
        let coeffs = self
            .coeffs
            .iter()
            .take(degree)
            .enumerate()
            .map(|(i, c)| c * (degree - i) as f64)
            .collect();
        Polynomial { coeffs }
    }

    /// Evaluate the first derivative with the power rule, without building it.
    pub fn evaluate_derivative(&self, x: f64) -> f64 {
        let degree = self.degree();
        self.coeffs
            .iter()
            .take(degree)
            .enumerate()
            .fold(0.0, |acc, (i, c)| acc * x + c * (degree - i) as f64)
    }

    /// Divide by `(x - root)`, returning the quotient and the remainder.
    pub fn synthetic_divide(&self, root: f64) -> (Self, f64) {
        if self.coeffs.len() < 2 {
            return (Polynomial::zero(), self.constant_term());
        }
        let mut carried = Vec::with_capacity(self.coeffs.len());
        let mut acc = 0.0;
        for c in &self.coeffs {
            acc = acc * root + c;
            carried.push(acc);
        }
        let remainder = carried.pop().unwrap_or(0.0);
        (Polynomial { coeffs: carried }, remainder)
    }

    /// Split off the factor `x^k` given by trailing zero coefficients.
    ///
    /// Returns `k` (the multiplicity of the root `0`) and the reduced polynomial.
    pub fn strip_zero_roots(&self) -> (usize, Self) {
        let mut coeffs = self.coeffs.clone();
        let mut count = 0;
        while coeffs.len() > 1 && coeffs.last() == Some(&0.0) {
            coeffs.pop();
            count += 1;
        }
        (count, Polynomial { coeffs })
    }

    /// Render in the same grammar the parser accepts, using `var` as the variable.
    pub fn to_text(&self, var: char) -> String {
        let degree = self.degree();
        let mut out = String::new();
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            let power = degree - i;
            let magnitude = c.abs();
            if out.is_empty() {
                if c < 0.0 {
                    out.push('-');
                }
            } else {
                out.push_str(if c < 0.0 { " - " } else { " + " });
            }
            if power == 0 || magnitude != 1.0 {
                out.push_str(&show_coeff(magnitude));
            }
            match power {
                0 => {}
                1 => out.push(var),
                _ => {
                    out.push(var);
                    out.push('^');
                    out.push_str(&power.to_string());
                }
            }
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }
}

fn show_coeff(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coeffs: Vec<f64>) -> Self {
        Polynomial::new(coeffs)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coeffs: &[f64]) -> Self {
        Polynomial::new(coeffs.to_vec())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text('x'))
    }
}
