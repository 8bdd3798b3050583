//! Normalization of terms into a canonical shape.
//!
//! Normalization works bottom-up. The children of a term are normalized first; then, if the term
//! does not depend on `x` (see [`as_constant`](crate::symbolic::as_constant)), it collapses into
//! a [`Term::Scalar`]. Otherwise, the rules in [`rules`] for that kind of term are applied:
//!
//! - additive and multiplicative identities are removed,
//! - nested sums and products are flattened into a single list,
//! - the constants of a list are folded into one trailing scalar,
//! - lists with a single element are replaced by that element,
//! - powers are specialized by which operand is constant,
//! - conditionals with constant comparands are replaced by the selected branch.
//!
//! The output of every rule is itself normalized, so normalization is idempotent.
//!
//! ```
//! use alg_compute::symbolic::normalize;
//! use alg_parser::{parse_str, Term};
//!
//! let term = parse_str("*[ 1 2 3 x x ]*").unwrap();
//! assert_eq!(normalize(&term), Term::product(vec![
//!     Term::Variable,
//!     Term::Variable,
//!     Term::Scalar(6.0),
//! ]));
//! ```

pub mod rules;
pub mod step;

use alg_parser::{parser::ast::{Compare, Range}, Term};
use crate::{
    grow,
    symbolic::{constant::{as_folded, scalar_value}, step_collector::StepCollector},
};
use step::Step;
use tracing::debug;

/// Normalizes the term.
pub fn normalize(term: &Term) -> Term {
    normalize_with_steps(term, &mut ())
}

/// Normalizes the term, reporting every rule that fired to the step collector.
pub fn normalize_with_steps(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Term {
    let normalized = normalize_term(term, step_collector);
    debug!(input = %term, output = %normalized, "normalized term");
    normalized
}

/// Normalizes the term and all of its children.
fn normalize_term(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Term {
    grow(|| normalize_children(term, step_collector))
}

fn normalize_children(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Term {
    let mut child = |term: &Term| normalize_term(term, step_collector);
    let boxed = |term: Term| Box::new(term);

    let with_children = match term {
        Term::Scalar(_) | Term::Variable | Term::ScaledVariable(_) => term.clone(),
        Term::Func(func, arg) => Term::Func(*func, boxed(child(arg))),
        Term::TermToTerm(base, exponent) => Term::TermToTerm(boxed(child(base)), boxed(child(exponent))),
        Term::TermToScalar(base, exponent) => Term::TermToScalar(boxed(child(base)), *exponent),
        Term::ScalarToTerm(base, exponent) => Term::ScalarToTerm(*base, boxed(child(exponent))),
        Term::Add(a, b) => Term::Add(boxed(child(a)), boxed(child(b))),
        Term::Sub(a, b) => Term::Sub(boxed(child(a)), boxed(child(b))),
        Term::Mul(a, b) => Term::Mul(boxed(child(a)), boxed(child(b))),
        Term::Div(a, b) => Term::Div(boxed(child(a)), boxed(child(b))),
        Term::Sum(terms) => Term::Sum(terms.iter().map(&mut child).collect()),
        Term::Product(factors) => Term::Product(factors.iter().map(&mut child).collect()),
        Term::Compare(compare) => Term::Compare(Compare {
            op: compare.op,
            lhs: boxed(child(&compare.lhs)),
            rhs: boxed(child(&compare.rhs)),
            then: boxed(child(&compare.then)),
            otherwise: boxed(child(&compare.otherwise)),
        }),
        Term::Range(range) => Term::Range(Range {
            value: boxed(child(&range.value)),
            low: boxed(child(&range.low)),
            high: boxed(child(&range.high)),
            inside: boxed(child(&range.inside)),
            outside: boxed(child(&range.outside)),
        }),
    };

    rebuild(with_children, step_collector)
}

/// Normalizes a term whose children are already normalized.
///
/// Rules that construct new terms out of normalized parts use this to normalize the result. Since
/// a normalized constant is always a [`Term::Scalar`], the constant test only looks at the
/// immediate children.
pub(crate) fn rebuild(term: Term, step_collector: &mut dyn StepCollector<Step>) -> Term {
    if let Term::Scalar(_) = term {
        return term;
    }

    if let Some(value) = as_folded(&term) {
        step_collector.push(fold_step(&term));
        return Term::Scalar(value);
    }

    rules::apply(term, step_collector)
}

/// Returns the step that describes folding the given constant term.
fn fold_step(term: &Term) -> Step {
    match term {
        Term::TermToScalar(_, exponent) if *exponent == 0.0 => Step::PowerZero,
        Term::TermToTerm(_, exponent) if scalar_value(exponent) == Some(0.0) => Step::PowerZero,
        Term::Compare(_) | Term::Range(_) => Step::SelectBranch,
        _ => Step::FoldConstant,
    }
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

    fn normalize_str(input: &str) -> Term {
        normalize(&parse_str(input).unwrap())
    }

    #[test]
    fn constant_folding() {
        let term = Term::product(vec![
            s(0.0),
            Term::sum(vec![s(0.0), Term::exp(Term::ScaledVariable(-1.0))]),
        ]);
        assert_eq!(normalize(&term), s(0.0));
    }

    #[test]
    fn identity_elimination() {
        let term = Term::add(Term::mul(s(0.0), x()), x());
        assert_eq!(normalize(&term), x());
    }

    #[test]
    fn flattening_and_folding() {
        let term = Term::product(vec![s(1.0), s(2.0), s(3.0), x(), x()]);
        assert_eq!(normalize(&term), Term::product(vec![x(), x(), s(6.0)]));
    }

    #[test]
    fn scaled_variable_zero() {
        assert_eq!(normalize_str("0x"), s(0.0));
        assert_eq!(normalize_str("2x"), Term::ScaledVariable(2.0));
    }

    #[test]
    fn nested_constants_fold() {
        assert_eq!(normalize_str("sin + 1 2"), s(3.0f64.sin()));
        assert_eq!(normalize_str("e ln 1"), s(1.0));
    }

    #[test]
    fn functions_keep_normalized_argument() {
        assert_eq!(normalize_str("cos + x 0"), Term::cos(x()));
    }

    #[test]
    fn steps_are_reported() {
        let mut steps = Vec::new();
        let term = parse_str("+ * 0 x x").unwrap();
        assert_eq!(normalize_with_steps(&term, &mut steps), x());
        assert_eq!(steps, vec![Step::FoldConstant, Step::AddZero]);

        let mut steps = Vec::new();
        let term = parse_str("+ ^ sin x 0 1").unwrap();
        assert_eq!(normalize_with_steps(&term, &mut steps), Term::Scalar(2.0));
        assert_eq!(steps, vec![Step::PowerZero, Step::FoldConstant]);
    }

    #[test]
    fn empty_sum_is_positive_zero() {
        let term = normalize_str("+[ ]+");
        assert_eq!(term.to_string(), "0.00 ");
        assert!(matches!(term, Term::Scalar(value) if value.is_sign_positive()));
    }

    #[test]
    fn constant_operands_fold_before_absorbing() {
        assert!(matches!(normalize_str("* 0 ln -1"), Term::Scalar(value) if value.is_nan()));
        assert!(matches!(normalize_str("/ 0 0"), Term::Scalar(value) if value.is_nan()));
        assert_eq!(normalize(&Term::scalar_pow(0.0, s(0.0))), s(1.0));
        assert_eq!(normalize(&Term::scalar_pow(1.0, Term::sin(x()))), s(1.0));
    }

    #[test]
    fn deeply_nested_terms() {
        use crate::numerical::Eval;

        let depth = 10_000;
        let input = format!("{}+ x 0", "sin ".repeat(depth));
        let term = normalize_str(&input);
        assert_eq!(term.depth(), depth + 1);
        assert_eq!(
            term.tokenize().as_slice(),
            parse_str(&format!("{}x", "sin ".repeat(depth))).unwrap().tokenize().as_slice(),
        );
        assert_eq!(term.eval(0.0), 0.0);
        assert_eq!(normalize(&term).tokenize().as_slice(), term.tokenize().as_slice());

        // a constant chain folds all the way down
        let term = normalize_str(&format!("{}0", "sin ".repeat(depth)));
        assert_eq!(term, s(0.0));
    }

    #[test]
    fn normalized_is_fixed_point() {
        for input in [
            "+[ x - 3 x 2 ]+",
            "*[ x * 2 *[ x 3 ]* ]*",
            "/ sin x 4",
            "- 0 x",
            "^ 2 + x 1",
            "^ x 1",
            "> x 1 + x 0 *[ ]*",
            "<=> 1 0 2 sin x x",
        ] {
            let once = normalize_str(input);
            assert_eq!(normalize(&once), once, "{}", input);
        }
    }
}
