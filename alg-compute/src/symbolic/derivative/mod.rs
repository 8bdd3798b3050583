//! Symbolic differentiation with respect to `x`.
//!
//! Every derivative is [normalized](super::normalize()) before it is returned.

mod function;

use alg_parser::{parser::ast::{Compare, Range}, Term};
use crate::grow;
use super::normalize::normalize;
use tracing::debug;

/// `(f + g + h)' = f' + g' + h'`
fn sum_rule(terms: &[Term]) -> Term {
    Term::Sum(terms.iter().map(differentiate).collect())
}

/// `(f * g * h)' = f' * g * h + f * g' * h + f * g * h'`
fn product_rule(product: &[Term]) -> Term {
    let mut outer_sum = Vec::with_capacity(product.len());

    // the derivative replaces the factor at its own index, so the factor order is kept
    for derivative_index in 0..product.len() {
        let inner_mult = product.iter()
            .enumerate()
            .map(|(term_index, term)| {
                if derivative_index == term_index {
                    differentiate(term)
                } else {
                    term.clone()
                }
            })
            .collect();

        outer_sum.push(Term::Product(inner_mult));
    }

    Term::Sum(outer_sum)
}

/// `(n / d)' = (n' * d - n * d') / (d * d)`
fn quotient_rule(numerator: &Term, denominator: &Term) -> Term {
    Term::div(
        Term::sum(vec![
            Term::product(vec![differentiate(numerator), denominator.clone()]),
            Term::product(vec![Term::Scalar(-1.0), numerator.clone(), differentiate(denominator)]),
        ]),
        Term::mul(denominator.clone(), denominator.clone()),
    )
}

/// `(a ^ b)' = a ^ (b - 1) * (b' * a * ln a + b * a')`
fn general_power_rule(base: &Term, exponent: &Term) -> Term {
    Term::product(vec![
        Term::pow(base.clone(), Term::sum(vec![exponent.clone(), Term::Scalar(-1.0)])),
        Term::sum(vec![
            Term::product(vec![differentiate(exponent), base.clone(), Term::ln(base.clone())]),
            Term::product(vec![exponent.clone(), differentiate(base)]),
        ]),
    ])
}

/// Computes the derivative without normalizing it. [`derivative`] normalizes the whole result
/// once, which gives the same term as normalizing the derivative of every subterm.
fn differentiate(term: &Term) -> Term {
    grow(|| match term {
        Term::Scalar(_) => Term::Scalar(0.0),
        Term::Variable => Term::Scalar(1.0),
        Term::ScaledVariable(coefficient) => Term::Scalar(*coefficient),
        Term::Func(func, arg) => function::function_derivative(*func, arg),

        // `(a ^ p)' = p * a ^ (p - 1) * a'`
        Term::TermToScalar(base, exponent) => Term::product(vec![
            Term::Scalar(*exponent),
            Term::pow_scalar((**base).clone(), exponent - 1.0),
            differentiate(base),
        ]),

        // `(v ^ b)' = ln v * b' * v ^ b`
        Term::ScalarToTerm(base, exponent) => Term::product(vec![
            Term::Scalar(base.ln()),
            differentiate(exponent),
            term.clone(),
        ]),

        Term::TermToTerm(base, exponent) => general_power_rule(base, exponent),
        Term::Add(a, b) => Term::add(differentiate(a), differentiate(b)),
        Term::Sub(a, b) => Term::sub(differentiate(a), differentiate(b)),

        // `(a * b)' = a' * b + b' * a`
        Term::Mul(a, b) => Term::add(
            Term::mul(differentiate(a), (**b).clone()),
            Term::mul(differentiate(b), (**a).clone()),
        ),

        Term::Div(..) => match normalize(term) {
            Term::Div(numerator, denominator) => quotient_rule(&numerator, &denominator),
            normalized => differentiate(&normalized),
        },

        Term::Sum(terms) => sum_rule(terms),
        Term::Product(factors) => product_rule(factors),

        // branches are differentiated, the comparison itself is kept
        Term::Compare(compare) => Term::Compare(Compare {
            op: compare.op,
            lhs: compare.lhs.clone(),
            rhs: compare.rhs.clone(),
            then: Box::new(differentiate(&compare.then)),
            otherwise: Box::new(differentiate(&compare.otherwise)),
        }),
        Term::Range(range) => Term::Range(Range {
            value: range.value.clone(),
            low: range.low.clone(),
            high: range.high.clone(),
            inside: Box::new(differentiate(&range.inside)),
            outside: Box::new(differentiate(&range.outside)),
        }),
    })
}

/// Computes the normalized derivative of the term with respect to `x`.
///
/// ```
/// use alg_compute::symbolic::derivative;
/// use alg_parser::{parse_str, Term};
///
/// let term = parse_str("^ x 3").unwrap();
/// assert_eq!(derivative(&term), Term::product(vec![
///     Term::pow_scalar(Term::Variable, 2.0),
///     Term::Scalar(3.0),
/// ]));
/// ```
pub fn derivative(term: &Term) -> Term {
    let result = normalize(&differentiate(term));
    debug!(input = %term, output = %result, "differentiated term");
    result
}

#[cfg(test)]
mod tests {
    use alg_parser::parse_str;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Term {
        Term::Variable
    }

    fn s(value: f64) -> Term {
        Term::Scalar(value)
    }

    fn derivative_str(input: &str) -> Term {
        derivative(&parse_str(input).unwrap())
    }

    #[test]
    fn leaves() {
        assert_eq!(derivative_str("3"), s(0.0));
        assert_eq!(derivative_str("x"), s(1.0));
        assert_eq!(derivative_str("-2.5x"), s(-2.5));
    }

    #[test]
    fn logistic() {
        let e = || Term::exp(Term::ScaledVariable(-1.0));
        let term = Term::div(s(1.0), Term::add(s(1.0), e()));
        assert_eq!(
            derivative(&term),
            Term::div(
                e(),
                Term::mul(Term::add(s(1.0), e()), Term::add(s(1.0), e())),
            ),
        );
    }

    #[test]
    fn sum_and_difference() {
        assert_eq!(derivative_str("+[ x 2x 5 ]+"), s(3.0));
        assert_eq!(derivative_str("+ sin x x"), Term::add(Term::cos(x()), s(1.0)));
        assert_eq!(derivative_str("- sin x x"), Term::sub(Term::cos(x()), s(1.0)));
        assert_eq!(derivative_str("- 3 sin x"), Term::mul(s(-1.0), Term::cos(x())));
    }

    #[test]
    fn product_keeps_factor_order() {
        assert_eq!(
            derivative_str("*[ sin x e x ]*"),
            Term::sum(vec![
                Term::product(vec![Term::cos(x()), Term::exp(x())]),
                Term::product(vec![Term::sin(x()), Term::exp(x())]),
            ]),
        );
    }

    #[test]
    fn multiplication() {
        assert_eq!(
            derivative_str("* x sin x"),
            Term::add(Term::sin(x()), Term::mul(Term::cos(x()), x())),
        );
    }

    #[test]
    fn division_by_constant() {
        // normalized to a product before differentiating
        assert_eq!(derivative_str("/ sin x 2"), Term::product(vec![Term::cos(x()), s(0.5)]));
    }

    #[test]
    fn scalar_exponent() {
        assert_eq!(derivative_str("^ x 2"), Term::product(vec![x(), s(2.0)]));
        assert_eq!(
            derivative_str("^ sin x 3"),
            Term::product(vec![Term::pow_scalar(Term::sin(x()), 2.0), Term::cos(x()), s(3.0)]),
        );
    }

    #[test]
    fn scalar_base() {
        assert_eq!(
            derivative_str("^ 2 x"),
            Term::product(vec![Term::scalar_pow(2.0, x()), s(2.0f64.ln())]),
        );
    }

    #[test]
    fn term_exponent() {
        // (x ^ x)' = x ^ (x - 1) * (x * ln x + x)
        assert_eq!(
            derivative_str("^ x x"),
            Term::product(vec![
                Term::pow(x(), Term::sum(vec![x(), s(-1.0)])),
                Term::sum(vec![
                    Term::product(vec![x(), Term::ln(x())]),
                    x(),
                ]),
            ]),
        );
    }

    #[test]
    fn conditionals_keep_comparands() {
        assert_eq!(
            derivative_str("> x 0 sin x * 2 x"),
            Term::greater(x(), s(0.0), Term::cos(x()), s(2.0)),
        );
        assert_eq!(
            derivative_str("== x 0 sin x x"),
            Term::equal(x(), s(0.0), Term::cos(x()), s(1.0)),
        );
        assert_eq!(
            derivative_str("<=> x 0 1 ^ x 2 x"),
            Term::range(x(), s(0.0), s(1.0), Term::product(vec![x(), s(2.0)]), s(1.0)),
        );
    }

    #[test]
    fn deeply_nested_terms() {
        use crate::numerical::Eval;

        let depth = 1_000;
        let mut term = x();
        for _ in 0..depth {
            term = Term::sin(term);
        }

        // one `cos` factor per level of the chain
        let result = derivative(&term);
        match &result {
            Term::Product(factors) => assert_eq!(factors.len(), depth),
            other => panic!("expected a product, got {}", other),
        }
        assert_eq!(result.eval(0.0), 1.0);

        // a sum chain has a derivative of linear size, so it can go much deeper
        let depth = 10_000;
        let term = parse_str(&format!("{}x", "+ x ".repeat(depth))).unwrap();
        assert_eq!(derivative(&term), s(depth as f64 + 1.0));
    }

    #[test]
    fn conditional_with_constant_comparands() {
        assert_eq!(derivative_str("< 1 2 sin x x"), Term::cos(x()));
    }
}
