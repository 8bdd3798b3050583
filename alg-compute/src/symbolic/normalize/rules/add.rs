//! Normalization rules for addition, subtraction and sums.

use alg_parser::Term;
use crate::{
    grow,
    symbolic::{normalize::{rebuild, step::Step}, step_collector::StepCollector},
};
use super::{downgrade, is_value};

/// `+ 0 a = a`
/// `+ a 0 = a`
pub fn add(a: Term, b: Term, step_collector: &mut dyn StepCollector<Step>) -> Term {
    if is_value(&a, 0.0) {
        step_collector.push(Step::AddZero);
        b
    } else if is_value(&b, 0.0) {
        step_collector.push(Step::AddZero);
        a
    } else {
        Term::add(a, b)
    }
}

/// `- a 0 = a`
/// `- 0 a = * -1 a`
pub fn sub(a: Term, b: Term, step_collector: &mut dyn StepCollector<Step>) -> Term {
    if is_value(&b, 0.0) {
        step_collector.push(Step::SubZero);
        a
    } else if is_value(&a, 0.0) {
        step_collector.push(Step::ZeroMinus);
        negate(b, step_collector)
    } else {
        Term::sub(a, b)
    }
}

/// Builds the normalized `* -1 a` from a normalized `a`.
fn negate(term: Term, step_collector: &mut dyn StepCollector<Step>) -> Term {
    rebuild(Term::mul(Term::Scalar(-1.0), term), step_collector)
}

/// Inlines nested sums into `out`, preserving order. Returns true if anything was inlined.
fn flatten(term: Term, out: &mut Vec<Term>, step_collector: &mut dyn StepCollector<Step>) -> bool {
    grow(|| match term {
        Term::Sum(terms) => {
            for term in terms {
                flatten(term, out, step_collector);
            }
            true
        },
        Term::Add(a, b) => {
            flatten(*a, out, step_collector);
            flatten(*b, out, step_collector);
            true
        },
        Term::Sub(a, b) => {
            flatten(*a, out, step_collector);
            out.push(negate(*b, step_collector));
            true
        },
        term => {
            out.push(term);
            false
        },
    })
}

/// Flattens the sum, then folds its constants into one trailing scalar.
///
/// `+[ a +[ b 1 ]+ 2 ]+ = +[ a b 3 ]+`
pub fn sum(terms: Vec<Term>, step_collector: &mut dyn StepCollector<Step>) -> Term {
    let mut flat = Vec::with_capacity(terms.len());
    let mut inlined = false;
    for term in terms {
        inlined |= flatten(term, &mut flat, step_collector);
    }
    if inlined {
        step_collector.push(Step::FlattenSum);
    }

    let mut total = 0.0;
    let mut constants = 0;
    let mut new_terms = Vec::with_capacity(flat.len());
    for term in flat {
        match term {
            Term::Scalar(value) => {
                total += value;
                constants += 1;
            },
            term => new_terms.push(term),
        }
    }

    if constants > 1 || (constants == 1 && total == 0.0) {
        step_collector.push(Step::FoldConstant);
    }
    if total != 0.0 {
        new_terms.push(Term::Scalar(total));
    }

    downgrade(new_terms, Term::Sum, step_collector)
}
