//! Normalization rules for powers.
//!
//! A normalized [`Term::TermToTerm`] has no constant operand: a constant base turns it into a
//! [`Term::ScalarToTerm`], and a constant exponent turns it into a [`Term::TermToScalar`].

use alg_parser::Term;
use crate::symbolic::{
    constant::scalar_value,
    normalize::{rebuild, step::Step},
    step_collector::StepCollector,
};

/// `^ a 1 = a`
/// `^ c b = ScalarToTerm(c, b)`
/// `^ a c = TermToScalar(a, c)`
pub fn term_to_term(base: Term, exponent: Term, step_collector: &mut dyn StepCollector<Step>) -> Term {
    if let Some(value) = scalar_value(&base) {
        step_collector.push(Step::PowerBaseConstant);
        return rebuild(Term::scalar_pow(value, exponent), step_collector);
    }

    if let Some(value) = scalar_value(&exponent) {
        step_collector.push(Step::PowerExponentConstant);
        return rebuild(Term::pow_scalar(base, value), step_collector);
    }

    Term::pow(base, exponent)
}

/// `^ a 1 = a`
pub fn term_to_scalar(base: Term, exponent: f64, step_collector: &mut dyn StepCollector<Step>) -> Term {
    if exponent == 1.0 {
        step_collector.push(Step::PowerOne);
        base
    } else {
        Term::pow_scalar(base, exponent)
    }
}

#[cfg(test)]
mod tests {
    use alg_parser::parse_str;
    use pretty_assertions::assert_eq;
    use crate::symbolic::normalize::{normalize, normalize_with_steps};
    use super::*;

    fn x() -> Term {
        Term::Variable
    }

    fn normalize_str(input: &str) -> Term {
        normalize(&parse_str(input).unwrap())
    }

    #[test]
    fn power_zero() {
        let mut steps = Vec::new();
        let term = Term::pow(Term::sin(x()), Term::sub(x(), x()));
        assert_eq!(normalize_with_steps(&term, &mut steps), Term::pow(Term::sin(x()), Term::sub(x(), x())));
        assert!(steps.is_empty());

        assert_eq!(normalize(&Term::pow(x(), Term::Scalar(0.0))), Term::Scalar(1.0));
        assert_eq!(normalize(&Term::pow_scalar(x(), 0.0)), Term::Scalar(1.0));
    }

    #[test]
    fn power_one() {
        assert_eq!(normalize_str("^ sin x 1"), Term::sin(x()));
        assert_eq!(normalize(&Term::pow(x(), Term::add(Term::Scalar(0.5), Term::Scalar(0.5)))), x());
    }

    #[test]
    fn constant_base() {
        assert_eq!(
            normalize(&Term::pow(Term::add(Term::Scalar(1.0), Term::Scalar(1.0)), x())),
            Term::scalar_pow(2.0, x()),
        );
        assert_eq!(normalize_str("^ 1 x"), Term::Scalar(1.0));
        assert_eq!(normalize_str("^ 0 x"), Term::Scalar(0.0));
    }

    #[test]
    fn constant_exponent() {
        assert_eq!(
            normalize(&Term::pow(x(), Term::mul(Term::Scalar(2.0), Term::Scalar(1.5)))),
            Term::pow_scalar(x(), 3.0),
        );
    }

    #[test]
    fn base_normalized() {
        assert_eq!(normalize_str("^ + x 0 2"), Term::pow_scalar(x(), 2.0));
        assert_eq!(normalize_str("^ 3 * x 1"), Term::scalar_pow(3.0, x()));
    }
}
