//! Normalization rules for multiplication, division and products.

use alg_parser::Term;
use crate::{
    grow,
    symbolic::{
        constant::scalar_value,
        normalize::{rebuild, step::Step},
        step_collector::StepCollector,
    },
};
use super::{downgrade, is_value};

/// `* 1 a = a`
/// `* a 1 = a`
pub fn mul(a: Term, b: Term, step_collector: &mut dyn StepCollector<Step>) -> Term {
    if is_value(&a, 1.0) {
        step_collector.push(Step::MultiplyOne);
        b
    } else if is_value(&b, 1.0) {
        step_collector.push(Step::MultiplyOne);
        a
    } else {
        Term::mul(a, b)
    }
}

/// `/ a c = *[ a 1/c ]*`
pub fn div(numerator: Term, denominator: Term, step_collector: &mut dyn StepCollector<Step>) -> Term {
    match scalar_value(&denominator) {
        Some(value) => {
            step_collector.push(Step::DivideByConstant);
            rebuild(Term::product(vec![numerator, Term::Scalar(value.recip())]), step_collector)
        },
        None => Term::div(numerator, denominator),
    }
}

/// Inlines nested products into `out`, preserving order. Returns true if anything was inlined.
///
/// Divisions are never inlined.
fn flatten(term: Term, out: &mut Vec<Term>) -> bool {
    grow(|| match term {
        Term::Product(factors) => {
            for factor in factors {
                flatten(factor, out);
            }
            true
        },
        Term::Mul(a, b) => {
            flatten(*a, out);
            flatten(*b, out);
            true
        },
        term => {
            out.push(term);
            false
        },
    })
}

/// Flattens the product, then folds its constants into one trailing scalar. A zero factor makes
/// the whole product zero.
///
/// `*[ a *[ b 2 ]* 3 ]* = *[ a b 6 ]*`
pub fn product(factors: Vec<Term>, step_collector: &mut dyn StepCollector<Step>) -> Term {
    let mut flat = Vec::with_capacity(factors.len());
    let mut inlined = false;
    for factor in factors {
        inlined |= flatten(factor, &mut flat);
    }
    if inlined {
        step_collector.push(Step::FlattenProduct);
    }

    let mut total = 1.0;
    let mut constants = 0;
    let mut new_factors = Vec::with_capacity(flat.len());
    for factor in flat {
        match factor {
            Term::Scalar(value) => {
                total *= value;
                constants += 1;
            },
            factor => new_factors.push(factor),
        }
    }

    // also catches a product of tiny constants that underflows to zero
    if total == 0.0 {
        step_collector.push(Step::FoldConstant);
        return Term::Scalar(0.0);
    }

    if constants > 1 || (constants == 1 && total == 1.0) {
        step_collector.push(Step::FoldConstant);
    }
    if total != 1.0 {
        new_factors.push(Term::Scalar(total));
    }

    downgrade(new_factors, Term::Product, step_collector)
}

#[cfg(test)]
mod tests {
    use alg_parser::parse_str;
    use pretty_assertions::assert_eq;
    use crate::symbolic::normalize::normalize;
    use super::*;

    fn x() -> Term {
        Term::Variable
    }

    fn normalize_str(input: &str) -> Term {
        normalize(&parse_str(input).unwrap())
    }

    #[test]
    fn multiply_one() {
        assert_eq!(normalize_str("* 1 sin x"), Term::sin(x()));
        assert_eq!(normalize_str("* x / 2 2"), x());
        assert_eq!(normalize_str("* x 2"), Term::mul(x(), Term::Scalar(2.0)));
    }

    #[test]
    fn multiply_zero() {
        assert_eq!(normalize_str("* 0 sin x"), Term::Scalar(0.0));
        assert_eq!(normalize_str("*[ x sin x 0 ]*"), Term::Scalar(0.0));
    }

    #[test]
    fn divide_by_constant() {
        assert_eq!(normalize_str("/ x 4"), Term::product(vec![x(), Term::Scalar(0.25)]));
        assert_eq!(normalize_str("/ x 1"), x());
        assert_eq!(
            normalize_str("/ *[ x 2 ]* 4"),
            Term::product(vec![x(), Term::Scalar(0.5)]),
        );
        assert_eq!(normalize_str("/ *[ x 4 ]* 4"), x());
    }

    #[test]
    fn division_by_term_is_kept() {
        assert_eq!(normalize_str("/ 1 x"), Term::div(Term::Scalar(1.0), x()));
        assert_eq!(normalize_str("/ 0 x"), Term::Scalar(0.0));
    }

    #[test]
    fn product_does_not_inline_division() {
        assert_eq!(
            normalize_str("*[ / 1 x x ]*"),
            Term::product(vec![Term::div(Term::Scalar(1.0), x()), x()]),
        );
    }

    #[test]
    fn product_flattens_multiplication() {
        assert_eq!(
            normalize_str("*[ * x 3 *[ sin x 2 ]* ]*"),
            Term::product(vec![x(), Term::sin(x()), Term::Scalar(6.0)]),
        );
    }

    #[test]
    fn product_underflow_is_zero() {
        let term = Term::product(vec![x(), Term::Scalar(1e-200), Term::Scalar(1e-200)]);
        assert_eq!(normalize(&term), Term::Scalar(0.0));
    }
}
