//! Seeded Newton-Raphson search for the real roots of high-degree residuals, with
//! placeholder labels or Durand-Kerner estimates for whatever stays off the real line.

use num_complex::Complex64;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use super::config::{ComplexRootStrategy, SolverConfig};
use crate::polynomial::Polynomial;
use crate::root::Root;

const INTEGER_GUESS_LIMIT: i32 = 20;
const FRACTION_NUMERATOR_LIMIT: i32 = 10;
const FRACTION_DENOMINATORS: std::ops::RangeInclusive<i32> = 2..=10;
const RANDOM_SCALES: [f64; 5] = [1.0, 5.0, 10.0, 50.0, 100.0];
const SAMPLES_PER_SCALE: usize = 20;
/// Durand-Kerner results with a smaller imaginary part are reported as real.
const REAL_AXIS_TOLERANCE: f64 = 1e-8;

/// Real roots found by the Newton-Raphson search.
#[derive(Clone, Debug, PartialEq)]
pub struct RealSearch {
    pub roots: Vec<f64>,
    pub attempts: usize,
}

/// Run the numerical stage on `poly`, seeding the random guesses from `config.seed`.
pub fn solve_numeric(poly: &Polynomial, config: &SolverConfig) -> Vec<Root> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    solve_numeric_with_rng(poly, config, &mut rng)
}

/// Run the numerical stage on `poly`, drawing random guesses from `rng`.
pub fn solve_numeric_with_rng<R: Rng + ?Sized>(
    poly: &Polynomial,
    config: &SolverConfig,
    rng: &mut R,
) -> Vec<Root> {
    let expected = poly.degree();
    let search = find_real_roots(poly, expected, config, rng);
    let missing = expected.saturating_sub(search.roots.len());
    debug!(
        expected,
        found = search.roots.len(),
        attempts = search.attempts,
        missing,
        "numerical search finished"
    );

    let mut roots: Vec<Root> = search.roots.iter().copied().map(Root::Real).collect();
    if missing == 0 {
        return roots;
    }

    match config.complex_roots {
        ComplexRootStrategy::Label => roots.extend(unresolved_labels(missing)),
        ComplexRootStrategy::DurandKerner => {
            let mut rest = poly.clone();
            for root in &search.roots {
                rest = rest.synthetic_divide(*root).0;
            }
            match durand_kerner(&rest, config) {
                Some(found) => roots.extend(classify_estimates(found)),
                None => {
                    debug!("durand-kerner did not converge, labelling remaining roots");
                    roots.extend(unresolved_labels(missing));
                }
            }
        }
    }
    roots
}

/// Systematic guesses followed by random ones at several magnitudes.
pub fn guess_pool<R: Rng + ?Sized>(rng: &mut R) -> Vec<f64> {
    let mut guesses: Vec<f64> = (-INTEGER_GUESS_LIMIT..=INTEGER_GUESS_LIMIT)
        .map(f64::from)
        .collect();

    for i in -FRACTION_NUMERATOR_LIMIT..=FRACTION_NUMERATOR_LIMIT {
        for j in FRACTION_DENOMINATORS {
            guesses.push(f64::from(i) / f64::from(j));
        }
    }

    for scale in RANDOM_SCALES {
        for _ in 0..SAMPLES_PER_SCALE {
            guesses.push((rng.gen::<f64>() - 0.5) * 2.0 * scale);
        }
    }
    guesses
}

/// Newton-Raphson from `guess`. Returns the last iterate, converged or not; callers
/// decide acceptance from the residual.
pub fn newton_raphson(
    poly: &Polynomial,
    guess: f64,
    tolerance: f64,
    max_iterations: usize,
) -> f64 {
    let mut x = guess;
    for _ in 0..max_iterations {
        let fx = poly.evaluate(x);
        let dfx = poly.evaluate_derivative(x);
        if dfx.abs() < tolerance {
            break;
        }
        let next = x - fx / dfx;
        if (next - x).abs() < tolerance {
            return next;
        }
        x = next;
    }
    x
}

/// Look for up to `expected` real roots of `poly`, counted with multiplicity.
///
/// Each Newton result is refined through [`refine_multiplicity`] before it is compared
/// with the roots already known, so the noisy iterates around a repeated root collapse
/// onto one value.
pub fn find_real_roots<R: Rng + ?Sized>(
    poly: &Polynomial,
    expected: usize,
    config: &SolverConfig,
    rng: &mut R,
) -> RealSearch {
    let derivatives = derivative_chain(poly);
    let mut found: Vec<(f64, usize)> = Vec::new();
    let mut count = 0;
    let mut attempts = 0;

    for guess in guess_pool(rng) {
        if attempts >= config.max_attempts || count >= expected {
            break;
        }
        attempts += 1;

        let x = newton_raphson(poly, guess, config.newton_tolerance, config.max_iterations);
        if !x.is_finite() || poly.evaluate(x).abs() >= config.root_tolerance {
            trace!(guess, x, "newton-raphson run discarded");
            continue;
        }
        let (root, multiplicity) = refine_multiplicity(poly, &derivatives, x, config);
        if found
            .iter()
            .any(|&(known, known_multiplicity)| {
                let clustered = known_multiplicity.max(multiplicity) > 1;
                same_root(known, root, clustered, config)
            })
        {
            continue;
        }
        let multiplicity = multiplicity.min(expected - count);
        trace!(guess, root, multiplicity, "newton-raphson accepted root");
        found.push((root, multiplicity));
        count += multiplicity;
    }

    let roots = found
        .into_iter()
        .flat_map(|(root, multiplicity)| std::iter::repeat(root).take(multiplicity))
        .collect();
    RealSearch { roots, attempts }
}

/// Snap a root estimate `x` of `poly` onto the simple root of the highest derivative
/// that still vanishes near it. Returns the refined root and its multiplicity.
///
/// A root of multiplicity `m` is a simple root of the `(m-1)`-th derivative, where
/// Newton-Raphson converges quadratically again.
pub fn refine_multiplicity(
    poly: &Polynomial,
    derivatives: &[Polynomial],
    x: f64,
    config: &SolverConfig,
) -> (f64, usize) {
    let reach = config.cluster_tolerance * x.abs().max(1.0);
    let mut root = x;
    let mut multiplicity = 1;
    for derivative in derivatives {
        let next = newton_raphson(
            derivative,
            root,
            config.newton_tolerance,
            config.max_iterations,
        );
        let vanishes = next.is_finite()
            && (next - x).abs() <= reach
            && poly.evaluate(next).abs() < config.root_tolerance
            && derivative.evaluate(next).abs()
                <= config.cluster_tolerance * magnitude(derivative, next);
        if !vanishes {
            break;
        }
        root = next;
        multiplicity += 1;
    }
    (root, multiplicity)
}

/// First through `(n-1)`-th derivatives of a degree `n` polynomial.
fn derivative_chain(poly: &Polynomial) -> Vec<Polynomial> {
    std::iter::successors(Some(poly.derivative()), |d| Some(d.derivative()))
        .take(poly.degree().saturating_sub(1))
        .collect()
}

/// `Σ |c_i|·|x|^i`, the size round-off in `poly.evaluate(x)` is measured against.
fn magnitude(poly: &Polynomial, x: f64) -> f64 {
    poly.coeffs()
        .iter()
        .fold(0.0, |acc, c| acc * x.abs() + c.abs())
}

fn same_root(known: f64, candidate: f64, clustered: bool, config: &SolverConfig) -> bool {
    let tolerance = if clustered {
        config.cluster_tolerance
    } else {
        config.root_tolerance
    };
    (known - candidate).abs() <= tolerance * known.abs().max(1.0)
}

/// `Complex root k` / `Complex root k (conjugate)` placeholders for `count` roots.
pub fn unresolved_labels(count: usize) -> Vec<Root> {
    let mut labels = Vec::with_capacity(count);
    for i in (0..count).step_by(2) {
        let pair = i / 2 + 1;
        labels.push(Root::Unresolved {
            pair,
            conjugate: false,
        });
        if i + 1 < count {
            labels.push(Root::Unresolved {
                pair,
                conjugate: true,
            });
        }
    }
    labels
}

/// All complex roots of `poly` by Durand-Kerner (Weierstrass) iteration.
///
/// Returns `None` when the leading coefficient vanishes or the iteration does not
/// settle within `10 * max_iterations` sweeps.
pub fn durand_kerner(poly: &Polynomial, config: &SolverConfig) -> Option<Vec<Complex64>> {
    let degree = poly.degree();
    if degree == 0 {
        return Some(Vec::new());
    }
    let lead = poly.leading();
    if lead == 0.0 || !lead.is_finite() {
        return None;
    }

    let monic: Vec<Complex64> = poly
        .coeffs()
        .iter()
        .map(|c| Complex64::new(c / lead, 0.0))
        .collect();
    let start = Complex64::new(0.4, 0.9);
    let mut roots: Vec<Complex64> = (0..degree).map(|k| start.powu(k as u32)).collect();

    for sweep in 0..config.max_iterations * 10 {
        let mut largest_step = 0.0f64;
        for i in 0..degree {
            let xi = roots[i];
            let denom = roots
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold(Complex64::new(1.0, 0.0), |acc, (_, xj)| acc * (xi - xj));
            if denom.norm() == 0.0 {
                continue;
            }
            let step = evaluate_complex(&monic, xi) / denom;
            roots[i] = xi - step;
            largest_step = largest_step.max(step.norm());
        }
        if !largest_step.is_finite() {
            return None;
        }
        if largest_step < config.newton_tolerance {
            trace!(sweeps = sweep + 1, "durand-kerner converged");
            return Some(roots);
        }
    }

    let settled = roots
        .iter()
        .all(|z| evaluate_complex(&monic, *z).norm() < config.root_tolerance);
    settled.then_some(roots)
}

fn evaluate_complex(coeffs: &[Complex64], z: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, c| acc * z + c)
}

fn classify_estimates(mut estimates: Vec<Complex64>) -> Vec<Root> {
    estimates.sort_by(|a, b| {
        let (ra, rb) = ((a.re * 1e9).round(), (b.re * 1e9).round());
        ra.total_cmp(&rb).then(b.im.total_cmp(&a.im))
    });
    estimates
        .into_iter()
        .map(|z| {
            if z.im.abs() < REAL_AXIS_TOLERANCE {
                Root::Real(z.re)
            } else {
                Root::Complex(z)
            }
        })
        .collect()
}
