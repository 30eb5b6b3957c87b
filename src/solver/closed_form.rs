//! Algebraic formulas for polynomials of degree three and below.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::root::{Root, SpecialCase};

pub fn solve_constant(c: f64) -> Vec<Root> {
    if c == 0.0 {
        vec![Root::Special(SpecialCase::InfiniteSolutions)]
    } else {
        vec![Root::Special(SpecialCase::NoSolution)]
    }
}

/// `ax + b = 0`
pub fn solve_linear(a: f64, b: f64) -> Vec<Root> {
    if a == 0.0 {
        return solve_constant(b);
    }
    vec![Root::Real(-b / a)]
}

/// `ax² + bx + c = 0`
pub fn solve_quadratic(a: f64, b: f64, c: f64, epsilon: f64) -> Vec<Root> {
    if a == 0.0 {
        return solve_linear(b, c);
    }

    let discriminant = b * b - 4.0 * a * c;
    if is_negligible(discriminant, (b * b).max((4.0 * a * c).abs()), epsilon) {
        return vec![Root::Real(-b / (2.0 * a))];
    }

    if discriminant > 0.0 {
        // q = -(b + sign(b)·√D)/2 keeps the two roots free of cancellation.
        let q = -0.5 * (b + b.signum() * discriminant.sqrt());
        return vec![Root::Real(q / a), Root::Real(c / q)];
    }

    let re = -b / (2.0 * a);
    let im = ((-discriminant).sqrt() / (2.0 * a)).abs();
    conjugate_pair(re, im)
}

/// `ax³ + bx² + cx + d = 0`, through the depressed cubic `t³ + pt + q = 0`.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64, epsilon: f64) -> Vec<Root> {
    if a == 0.0 {
        return solve_quadratic(b, c, d, epsilon);
    }

    let shift = b / (3.0 * a);
    let p = (3.0 * a * c - b * b) / (3.0 * a * a);
    let q = (2.0 * b * b * b - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a * a * a);
    let delta = (q / 2.0).powi(2) + (p / 3.0).powi(3);

    // Round-off in p and q grows with the shift, so the zero tests are scaled by it.
    let p_scale = p.abs() + shift * shift;
    let q_scale = q.abs() + shift.abs().powi(3);
    let delta_scale = q.abs() / 2.0 * q_scale + (p / 3.0).powi(2) * p_scale;
    if is_negligible(delta, delta_scale, epsilon) {
        if is_negligible(p, p_scale, epsilon) {
            return vec![Root::Real(-shift)];
        }
        let u = (-q / 2.0).cbrt();
        return vec![Root::Real(2.0 * u - shift), Root::Real(-u - shift)];
    }

    if delta > 0.0 {
        let sqrt_delta = delta.sqrt();
        let u = (-q / 2.0 + sqrt_delta).cbrt();
        let v = (-q / 2.0 - sqrt_delta).cbrt();
        let mut roots = vec![Root::Real(u + v - shift)];
        let re = -(u + v) / 2.0 - shift;
        let im = (3f64.sqrt() / 2.0 * (u - v)).abs();
        roots.extend(conjugate_pair(re, im));
        return roots;
    }

    let rho = (-(p / 3.0).powi(3)).sqrt();
    let theta = (-q / (2.0 * rho)).clamp(-1.0, 1.0).acos();
    let m = 2.0 * rho.cbrt();
    (0..3)
        .map(|k| Root::Real(m * ((theta + 2.0 * PI * f64::from(k)) / 3.0).cos() - shift))
        .collect()
}

/// `value` is zero up to round-off relative to `scale`.
fn is_negligible(value: f64, scale: f64, epsilon: f64) -> bool {
    value.abs() <= epsilon * scale
}

fn conjugate_pair(re: f64, im: f64) -> Vec<Root> {
    let z = Complex64::new(re, im);
    vec![Root::Complex(z), Root::Complex(z.conj())]
}
