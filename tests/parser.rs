use rroots::{RootError, parse_equation, parse_polynomial};

fn coeffs(input: &str) -> Vec<f64> {
    parse_polynomial(input)
        .unwrap_or_else(|e| panic!("failed to parse {input}: {e}"))
        .into_coeffs()
}

#[test]
fn basic_terms() {
    assert_eq!(coeffs("x^3-6x^2+11x-6"), vec![1.0, -6.0, 11.0, -6.0]);
    assert_eq!(coeffs("3x^2 + 2x + 1"), vec![3.0, 2.0, 1.0]);
    assert_eq!(coeffs("x"), vec![1.0, 0.0]);
    assert_eq!(coeffs("-x"), vec![-1.0, 0.0]);
    assert_eq!(coeffs("5"), vec![5.0]);
    assert_eq!(coeffs("0"), vec![0.0]);
}

#[test]
fn star_notation_and_case() {
    assert_eq!(coeffs("2*x**3 - X"), vec![2.0, 0.0, -1.0, 0.0]);
    assert_eq!(coeffs("  4 * x ^ 2  -  1 "), vec![4.0, 0.0, -1.0]);
}

#[test]
fn decimals_and_repeated_powers() {
    assert_eq!(coeffs("0.5x^2 + .25x - 1."), vec![0.5, 0.25, -1.0]);
    assert_eq!(coeffs("x^2 + 2x^2 - x + 3x"), vec![3.0, 2.0, 0.0]);
    assert_eq!(coeffs("1 + x^2"), vec![1.0, 0.0, 1.0]);
}

#[test]
fn sign_runs_collapse() {
    assert_eq!(coeffs("x - -3"), vec![1.0, 3.0]);
    assert_eq!(coeffs("+x^2 +- 4"), vec![1.0, 0.0, -4.0]);
}

#[test]
fn negative_exponents_are_discarded() {
    assert_eq!(coeffs("x^2 + x^-1"), vec![1.0, 0.0, 0.0]);
}

#[test]
fn other_variable_letters() {
    assert_eq!(coeffs("t^2 - 1"), vec![1.0, 0.0, -1.0]);
}

#[test]
fn equations_move_everything_left() {
    let poly = parse_equation("x^2 = 4").expect("parse equation");
    assert_eq!(poly.coeffs(), &[1.0, 0.0, -4.0]);
    let poly = parse_equation("2x + 1 = x^2 - x").expect("parse equation");
    assert_eq!(poly.coeffs(), &[-1.0, 3.0, 1.0]);
    let poly = parse_equation("x^3 - 1").expect("plain polynomial");
    assert_eq!(poly.coeffs(), &[1.0, 0.0, 0.0, -1.0]);
}

#[test]
fn malformed_input_is_a_parse_error() {
    for input in ["", "   ", "3x^", "x^2.5", "2^3", "x y", "x +", "abc", "x^2 = 1 = 2", "= 4", "x $ 2"] {
        match parse_equation(input) {
            Err(RootError::Parse(_)) => {}
            other => panic!("{input:?} should fail to parse, got {other:?}"),
        }
    }
}

#[test]
fn several_variables_are_unsupported() {
    assert!(matches!(
        parse_polynomial("x^2 + y"),
        Err(RootError::Unsupported(_))
    ));
}

#[test]
fn huge_degree_is_unsupported() {
    assert!(matches!(
        parse_polynomial("x^100000"),
        Err(RootError::Unsupported(_))
    ));
}
