use crate::error::{Result, RootError};
use crate::polynomial::Polynomial;
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{char, digit0, digit1, one_of, satisfy};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::error::{VerboseError, convert_error};
use nom::multi::{fold_many1, many0};
use nom::sequence::{pair, preceded};
use tracing::debug;

/// Largest exponent accepted from text input.
pub const MAX_DEGREE: usize = 1024;

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Term {
    coeff: f64,
    var: Option<char>,
    exponent: i64,
}

impl Term {
    fn signed(self, sign: f64) -> Self {
        Term {
            coeff: sign * self.coeff,
            ..self
        }
    }
}

/// Parse a single-variable polynomial such as `3x^2 - 2x + 1` or `x**3 - 6*x`.
///
/// Empty or blank text is a [`RootError::Parse`], not a "No valid polynomial" root.
pub fn parse_polynomial(input: &str) -> Result<Polynomial> {
    let terms = parse_terms(&clean(input))?;
    assemble(&terms)
}

/// Parse either a polynomial or an equation `lhs = rhs`, returning `lhs - rhs`.
pub fn parse_equation(input: &str) -> Result<Polynomial> {
    let mut sides = input.split('=');
    let lhs = sides.next().unwrap_or_default();
    match (sides.next(), sides.next()) {
        (None, _) => parse_polynomial(lhs),
        (Some(rhs), None) => {
            let mut terms = parse_terms(&clean(lhs))?;
            terms.extend(
                parse_terms(&clean(rhs))?
                    .into_iter()
                    .map(|term| term.signed(-1.0)),
            );
            assemble(&terms)
        }
        _ => Err(RootError::Parse(
            "equation must contain at most one '='".to_string(),
        )),
    }
}

fn clean(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .collect::<String>()
        .replace("**", "^")
        .replace('*', "")
}

fn parse_terms(cleaned: &str) -> Result<Vec<Term>> {
    if cleaned.is_empty() {
        return Err(RootError::Parse("empty polynomial".to_string()));
    }
    match all_consuming(term_list)(cleaned) {
        Ok((_, terms)) => Ok(terms),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(RootError::Parse(format!(
            "cannot read terms of `{cleaned}`:\n{}",
            convert_error(cleaned, e)
        ))),
        Err(nom::Err::Incomplete(_)) => Err(RootError::Parse(format!(
            "incomplete polynomial `{cleaned}`"
        ))),
    }
}

fn assemble(terms: &[Term]) -> Result<Polynomial> {
    let mut variable: Option<char> = None;
    for var in terms.iter().filter_map(|t| t.var) {
        match variable {
            None => variable = Some(var),
            Some(seen) if seen != var => {
                return Err(RootError::Unsupported(format!(
                    "more than one variable (`{seen}` and `{var}`)"
                )));
            }
            Some(_) => {}
        }
    }

    let max_exponent = terms.iter().map(|t| t.exponent).max().unwrap_or(0).max(0);
    let degree = usize::try_from(max_exponent)
        .ok()
        .filter(|d| *d <= MAX_DEGREE)
        .ok_or_else(|| {
            RootError::Unsupported(format!(
                "degree {max_exponent} exceeds the supported maximum of {MAX_DEGREE}"
            ))
        })?;

    let mut coeffs = vec![0.0; degree + 1];
    for term in terms {
        let Ok(power) = usize::try_from(term.exponent) else {
            debug!(exponent = term.exponent, "discarding term with negative exponent");
            continue;
        };
        if power > degree {
            continue;
        }
        coeffs[degree - power] += term.coeff;
    }

    if coeffs.iter().any(|c| !c.is_finite()) {
        return Err(RootError::Unsupported(
            "coefficient is not a finite number".to_string(),
        ));
    }
    Ok(Polynomial::new(coeffs))
}

fn term_list(input: &str) -> ParseResult<'_, Vec<Term>> {
    let (rest, first) = map(pair(opt(sign), term_body), |(s, term)| {
        term.signed(s.unwrap_or(1.0))
    })(input)?;
    let (rest, others) = many0(map(pair(sign, term_body), |(s, term)| term.signed(s)))(rest)?;
    let mut terms = Vec::with_capacity(others.len() + 1);
    terms.push(first);
    terms.extend(others);
    Ok((rest, terms))
}

// A run of signs collapses by parity, so `x - -3` reads as `x + 3`.
fn sign(input: &str) -> ParseResult<'_, f64> {
    fold_many1(
        one_of("+-"),
        || 1.0,
        |acc, c| if c == '-' { -acc } else { acc },
    )(input)
}

fn term_body(input: &str) -> ParseResult<'_, Term> {
    alt((
        map(pair(opt(coefficient), power), |(coeff, (var, exponent))| Term {
            coeff: coeff.unwrap_or(1.0),
            var: Some(var),
            exponent,
        }),
        map(coefficient, |coeff| Term {
            coeff,
            var: None,
            exponent: 0,
        }),
    ))(input)
}

fn power(input: &str) -> ParseResult<'_, (char, i64)> {
    pair(
        satisfy(|c| c.is_ascii_alphabetic()),
        map(opt(preceded(char('^'), exponent)), |e| e.unwrap_or(1)),
    )(input)
}

fn exponent(input: &str) -> ParseResult<'_, i64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), str::parse::<i64>)(input)
}

fn coefficient(input: &str) -> ParseResult<'_, f64> {
    map_res(
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        str::parse::<f64>,
    )(input)
}
