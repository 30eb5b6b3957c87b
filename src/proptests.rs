//! Property-based tests for parsing and root finding.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::parser::parse_polynomial;
    use crate::polynomial::Polynomial;
    use crate::solver::solve_coefficients;

    // Integer coefficient vectors of degree 0-5 with a non-zero leading term
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(-20i64..=20, 1..=6)
            .prop_filter("leading coefficient must be non-zero", |c| c[0] != 0)
            .prop_map(|c| Polynomial::new(c.into_iter().map(|v| v as f64).collect()))
    }

    // Linear factors (qx - p), so each root is p/q
    fn linear_factors() -> impl Strategy<Value = Vec<(i64, i64)>> {
        proptest::collection::vec((-6i64..=6, 1i64..=3), 1..=4)
    }

    fn expand(factors: &[(i64, i64)]) -> Polynomial {
        let mut coeffs = vec![1.0];
        for &(p, q) in factors {
            let mut next = vec![0.0; coeffs.len() + 1];
            for (i, c) in coeffs.iter().enumerate() {
                next[i] += c * q as f64;
                next[i + 1] -= c * p as f64;
            }
            coeffs = next;
        }
        Polynomial::new(coeffs)
    }

    proptest! {
        #[test]
        fn parse_inverts_display(poly in small_poly()) {
            let text = poly.to_string();
            let parsed = parse_polynomial(&text).expect("rendered polynomial parses");
            prop_assert_eq!(parsed, poly);
        }

        #[test]
        fn rational_roots_are_recovered_with_multiplicity(factors in linear_factors()) {
            let poly = expand(&factors);
            let roots = solve_coefficients(poly.coeffs());

            let mut expected: Vec<f64> = factors.iter().map(|&(p, q)| p as f64 / q as f64).collect();
            expected.sort_by(f64::total_cmp);
            let actual: Vec<f64> = roots.iter().filter_map(|r| r.as_real()).collect();

            prop_assert_eq!(actual.len(), expected.len(), "roots {:?}", roots);
            for (a, e) in actual.iter().zip(&expected) {
                prop_assert!((a - e).abs() < 1e-9, "{:?} vs {:?}", actual, expected);
            }
        }

        #[test]
        fn real_roots_evaluate_to_zero(poly in small_poly()) {
            for root in solve_coefficients(poly.coeffs()) {
                if let Some(x) = root.as_real() {
                    let scale = poly.coeffs().iter().map(|c| c.abs()).fold(1.0, f64::max);
                    prop_assert!(
                        poly.evaluate(x).abs() < 1e-9 * scale * x.abs().max(1.0).powi(poly.degree() as i32),
                        "{} at {} = {}", poly, x, poly.evaluate(x)
                    );
                }
            }
        }

        #[test]
        fn quadratic_roots_match_their_factors(
            r1 in -10.0f64..10.0,
            r2 in -10.0f64..10.0,
            k in -4i32..=2,
        ) {
            prop_assume!((r1 - r2).abs() > 1e-3);
            let scale = 10f64.powi(k);
            let (r1, r2) = (r1 * scale, r2 * scale);
            let roots = solve_coefficients(&[1.0, -(r1 + r2), r1 * r2]);
            let actual: Vec<f64> = roots.iter().filter_map(|r| r.as_real()).collect();
            let (lo, hi) = if r1 < r2 { (r1, r2) } else { (r2, r1) };
            let tolerance = 1e-9 * (lo.abs() + hi.abs());
            prop_assert_eq!(actual.len(), 2, "roots {:?}", roots);
            prop_assert!(
                (actual[0] - lo).abs() <= tolerance && (actual[1] - hi).abs() <= tolerance,
                "{:?} vs {:?}", actual, (lo, hi)
            );
        }

        #[test]
        fn cubic_roots_match_their_factors(
            r in proptest::array::uniform3(-10.0f64..10.0),
            k in -4i32..=2,
        ) {
            let mut expected = r;
            expected.sort_by(f64::total_cmp);
            prop_assume!(expected.windows(2).all(|w| w[1] - w[0] > 0.5));
            let scale = 10f64.powi(k);
            let [r1, r2, r3] = expected.map(|x| x * scale);
            let roots = solve_coefficients(&[
                1.0,
                -(r1 + r2 + r3),
                r1 * r2 + r1 * r3 + r2 * r3,
                -(r1 * r2 * r3),
            ]);
            let actual: Vec<f64> = roots.iter().filter_map(|r| r.as_real()).collect();
            prop_assert_eq!(actual.len(), 3, "roots {:?}", roots);
            for (a, e) in actual.iter().zip([r1, r2, r3]) {
                prop_assert!((a - e).abs() <= 1e-7 * scale, "{:?} vs {:?}", actual, [r1, r2, r3]);
            }
        }
    }
}
