//! Implementation of the normalization rules.
//!
//! Each rule receives a term whose children are already normalized and which is known not to be
//! constant, and returns the normalized term.

pub mod add;
pub mod branch;
pub mod multiply;
pub mod power;

use alg_parser::Term;
use crate::symbolic::{constant::scalar_value, step_collector::StepCollector};
use super::step::Step;

/// Returns true if the normalized term is the scalar with the given value.
pub(crate) fn is_value(term: &Term, value: f64) -> bool {
    scalar_value(term) == Some(value)
}

/// Replaces a list with a single element by that element.
pub(crate) fn downgrade(
    mut items: Vec<Term>,
    list: fn(Vec<Term>) -> Term,
    step_collector: &mut dyn StepCollector<Step>,
) -> Term {
    if items.len() == 1 {
        step_collector.push(Step::CollapseList);
        items.remove(0)
    } else {
        list(items)
    }
}

/// Applies the rules for the kind of the given term.
pub fn apply(term: Term, step_collector: &mut dyn StepCollector<Step>) -> Term {
    match term {
        Term::Add(a, b) => add::add(*a, *b, step_collector),
        Term::Sub(a, b) => add::sub(*a, *b, step_collector),
        Term::Sum(terms) => add::sum(terms, step_collector),
        Term::Mul(a, b) => multiply::mul(*a, *b, step_collector),
        Term::Div(numerator, denominator) => multiply::div(*numerator, *denominator, step_collector),
        Term::Product(factors) => multiply::product(factors, step_collector),
        Term::TermToTerm(base, exponent) => power::term_to_term(*base, *exponent, step_collector),
        Term::TermToScalar(base, exponent) => power::term_to_scalar(*base, exponent, step_collector),
        Term::Compare(compare) => branch::compare(compare, step_collector),
        Term::Range(range) => branch::range(range, step_collector),
        Term::Scalar(_)
            | Term::Variable
            | Term::ScaledVariable(_)
            | Term::Func(..)
            | Term::ScalarToTerm(..) => term,
    }
}
