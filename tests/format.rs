use num_complex::Complex64;
use rroots::format::{format_complex, format_real};
use rroots::prelude::{roots, summary};
use rroots::{Root, SpecialCase, format_roots};

#[test]
fn integers_and_near_integers() {
    assert_eq!(format_real(3.0), "3");
    assert_eq!(format_real(-2.0), "-2");
    assert_eq!(format_real(4.000_000_000_01), "4");
    assert_eq!(format_real(-0.0), "0");
    assert_eq!(format_real(1e-12), "0");
}

#[test]
fn small_fractions() {
    assert_eq!(format_real(1.0 / 3.0), "1/3");
    assert_eq!(format_real(-2.5), "-5/2");
    assert_eq!(format_real(7.0 / 12.0), "7/12");
    assert_eq!(format_real(0.75), "3/4");
}

#[test]
fn decimals_are_trimmed() {
    assert_eq!(format_real(2f64.sqrt()), "1.414214");
    assert_eq!(format_real(1.0 / 13.0), "0.076923");
    // 99.5 = 199/2 is too large a numerator for fraction form
    assert_eq!(format_real(99.5), "99.5");
    assert_eq!(format_real(12.34), "12.34");
    // tenths still fit the fraction form
    assert_eq!(format_real(1.1), "11/10");
}

#[test]
fn complex_and_symbolic_roots() {
    assert_eq!(format_complex(Complex64::new(-1.0, 2.0)), "-1.0000 + 2.0000i");
    assert_eq!(format_complex(Complex64::new(-0.0, -0.5)), "0.0000 - 0.5000i");
    let list = vec![
        Root::Real(0.5),
        Root::Unresolved { pair: 1, conjugate: false },
        Root::Unresolved { pair: 1, conjugate: true },
        Root::Special(SpecialCase::NoSolution),
    ];
    assert_eq!(
        format_roots(&list),
        "1/2, Complex root 1, Complex root 1 (conjugate), No solution"
    );
    assert_eq!(Root::Real(-0.25).to_string(), "-1/4");
}

#[test]
fn summary_lines() {
    assert_eq!(roots("x^2 - 1").expect("roots"), "-1, 1");
    assert_eq!(
        summary("x^3-6x^2+11x-6").expect("summary"),
        vec![
            "Equation: x^3-6x^2+11x-6",
            "Degree: 3",
            "Roots (3): 1, 2, 3",
            "Found integer roots first!",
        ]
    );
    assert_eq!(
        summary("x^2 + 1").expect("summary"),
        vec![
            "Equation: x^2 + 1",
            "Degree: 2",
            "Roots (2): 0.0000 + 1.0000i, 0.0000 - 1.0000i",
        ]
    );
}
