use num_complex::Complex64;

use crate::root::Root;

const EPSILON: f64 = 1e-10;
const MAX_DENOMINATOR: u32 = 12;
const MAX_NUMERATOR: f64 = 100.0;

pub fn format_root(root: &Root) -> String {
    match root {
        Root::Real(x) => format_real(*x),
        Root::Complex(z) => format_complex(*z),
        Root::Unresolved { pair, conjugate } => {
            if *conjugate {
                format!("Complex root {pair} (conjugate)")
            } else {
                format!("Complex root {pair}")
            }
        }
        Root::Special(case) => case.label().to_string(),
    }
}

pub fn format_roots(roots: &[Root]) -> String {
    roots.iter().map(format_root).collect::<Vec<_>>().join(", ")
}

/// Render a real root as an integer, a small fraction, or a trimmed 6-place decimal.
pub fn format_real(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }

    let nearest = x.round();
    if (x - nearest).abs() < EPSILON {
        return show_integer(nearest);
    }

    for denom in 2..=MAX_DENOMINATOR {
        let numerator = x * f64::from(denom);
        let rounded = numerator.round();
        if (numerator - rounded).abs() < EPSILON && rounded.abs() < MAX_NUMERATOR {
            return format!("{}/{denom}", rounded as i64);
        }
    }

    let fixed = format!("{x:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Render `re ± imi` with four decimals.
pub fn format_complex(z: Complex64) -> String {
    let re = fixed4(z.re);
    if z.im < 0.0 {
        format!("{re} - {}i", fixed4(-z.im))
    } else {
        format!("{re} + {}i", fixed4(z.im))
    }
}

fn fixed4(value: f64) -> String {
    let text = format!("{value:.4}");
    if text == "-0.0000" {
        "0.0000".to_string()
    } else {
        text
    }
}

fn show_integer(value: f64) -> String {
    if value.abs() < 9.0e15 {
        (value as i64).to_string()
    } else {
        format!("{value:.0}")
    }
}
