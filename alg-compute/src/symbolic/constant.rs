//! Detection of terms whose value does not depend on `x`.

use alg_parser::Term;
use crate::{grow, numerical::func::apply};

/// Returns the value of the term if it is known not to depend on `x`.
///
/// This is a structural test, not a proof: `- x x` is reported as non-constant. When every operand
/// of a term is constant, the term folds to exactly the value [`Eval`](crate::numerical::Eval)
/// would produce. A few absorbing rules still apply when only part of a term is constant:
///
/// - a product (or `*`) with a constant zero factor is zero,
/// - a division with a constant zero numerator is zero,
/// - `0 ^ b` and `1 ^ b` are their base, and `a ^ 0` is one,
/// - a conditional whose comparands are constant is the value of the selected branch, if that
///   branch is constant.
pub fn as_constant(term: &Term) -> Option<f64> {
    grow(|| constant_with(term, as_constant))
}

/// Returns the value of a term whose children are already normalized, if it does not depend on
/// `x`.
///
/// A normalized term is constant exactly when it is a [`Term::Scalar`], so only the immediate
/// children need to be looked at.
pub(crate) fn as_folded(term: &Term) -> Option<f64> {
    constant_with(term, scalar_value)
}

/// Returns the payload of a [`Term::Scalar`].
pub(crate) fn scalar_value(term: &Term) -> Option<f64> {
    match term {
        Term::Scalar(value) => Some(*value),
        _ => None,
    }
}

/// Applies the constant rules to the term, using `child` to find the value of each child.
fn constant_with(term: &Term, child: fn(&Term) -> Option<f64>) -> Option<f64> {
    match term {
        Term::Scalar(value) => Some(*value),
        Term::Variable => None,
        Term::ScaledVariable(coefficient) => (*coefficient == 0.0).then_some(0.0),
        Term::Func(func, arg) => child(arg).map(|value| apply(*func, value)),
        Term::Add(a, b) => Some(child(a)? + child(b)?),
        Term::Sub(a, b) => Some(child(a)? - child(b)?),
        Term::Mul(a, b) => match (child(a), child(b)) {
            (Some(a), Some(b)) => Some(a * b),
            (a, b) if is_zero(a) || is_zero(b) => Some(0.0),
            _ => None,
        },
        Term::Div(numerator, denominator) => match (child(numerator), child(denominator)) {
            (Some(numerator), Some(denominator)) => Some(numerator / denominator),
            (Some(numerator), None) if numerator == 0.0 => Some(0.0),
            _ => None,
        },
        Term::Sum(terms) => terms.iter()
            .try_fold(0.0, |total, term| Some(total + child(term)?)),
        Term::Product(factors) => {
            let values = factors.iter().map(child).collect::<Vec<_>>();
            values.iter()
                .try_fold(1.0, |total, value| Some(total * (*value)?))
                .or_else(|| values.iter().copied().any(is_zero).then_some(0.0))
        },
        Term::TermToTerm(base, exponent) => match (child(base), child(exponent)) {
            (Some(base), Some(exponent)) => Some(base.powf(exponent)),
            (Some(base), None) if base == 0.0 || base == 1.0 => Some(base),
            (None, Some(exponent)) if exponent == 0.0 => Some(1.0),
            _ => None,
        },
        Term::TermToScalar(base, exponent) => match child(base) {
            Some(base) => Some(base.powf(*exponent)),
            None => (*exponent == 0.0).then_some(1.0),
        },
        Term::ScalarToTerm(base, exponent) => match child(exponent) {
            Some(exponent) => Some(base.powf(exponent)),
            None => (*base == 0.0 || *base == 1.0).then_some(*base),
        },
        Term::Compare(compare) => {
            let (lhs, rhs) = (child(&compare.lhs)?, child(&compare.rhs)?);
            child(compare.select(lhs, rhs))
        },
        Term::Range(range) => {
            let value = child(&range.value)?;
            let (low, high) = (child(&range.low)?, child(&range.high)?);
            child(range.select(value, low, high))
        },
    }
}

/// Returns true if the value is known to be zero.
fn is_zero(value: Option<f64>) -> bool {
    value == Some(0.0)
}

#[cfg(test)]
mod tests {
    use alg_parser::parse_str;
    use super::*;

    fn constant(input: &str) -> Option<f64> {
        as_constant(&parse_str(input).unwrap())
    }

    #[test]
    fn leaves() {
        assert_eq!(constant("3"), Some(3.0));
        assert_eq!(constant("x"), None);
        assert_eq!(constant("2x"), None);
        assert_eq!(constant("0x"), Some(0.0));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(constant("+ 1 2"), Some(3.0));
        assert_eq!(constant("- 1 x"), None);
        assert_eq!(constant("- x x"), None);
        assert_eq!(constant("/ 6 3"), Some(2.0));
        assert_eq!(constant("+[ 1 2 3 ]+"), Some(6.0));
        assert_eq!(constant("+[ 1 x ]+"), None);
        assert_eq!(constant("*[ 2 3 ]*"), Some(6.0));
        assert_eq!(constant("+[ ]+"), Some(0.0));
        assert_eq!(constant("*[ ]*"), Some(1.0));
    }

    #[test]
    fn zero_absorbs() {
        assert_eq!(constant("* x 0"), Some(0.0));
        assert_eq!(constant("* 0 sin x"), Some(0.0));
        assert_eq!(constant("*[ x 2 0x ]*"), Some(0.0));
        assert_eq!(constant("/ 0 x"), Some(0.0));
        assert_eq!(constant("/ x 0"), None);
    }

    #[test]
    fn constant_operands_fold_exactly() {
        assert!(constant("* 0 ln -1").unwrap().is_nan());
        assert!(constant("*[ 0 / 1 0 ]*").unwrap().is_nan());
        assert!(constant("/ 0 0").unwrap().is_nan());
        assert_eq!(as_constant(&Term::scalar_pow(0.0, Term::Scalar(0.0))), Some(1.0));
        assert_eq!(as_constant(&Term::scalar_pow(0.0, Term::Scalar(-1.0))), Some(f64::INFINITY));
        assert_eq!(as_constant(&Term::scalar_pow(0.0, Term::Variable)), Some(0.0));
    }

    #[test]
    fn empty_sum_is_positive_zero() {
        let value = constant("+[ ]+").unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn folded_reads_only_children() {
        assert_eq!(as_folded(&parse_str("+ 1 2").unwrap()), Some(3.0));
        assert_eq!(as_folded(&parse_str("* 0 x").unwrap()), Some(0.0));
        assert_eq!(as_folded(&parse_str("+ 1 + 1 1").unwrap()), None);
        assert_eq!(as_constant(&parse_str("+ 1 + 1 1").unwrap()), Some(3.0));
    }

    #[test]
    fn functions() {
        assert_eq!(constant("e 0"), Some(1.0));
        assert_eq!(constant("sin x"), None);
        assert_eq!(constant("ln * 0 x"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn powers() {
        assert_eq!(constant("^ 2 3"), Some(8.0));
        assert_eq!(constant("^ 0 x"), Some(0.0));
        assert_eq!(constant("^ 1 x"), Some(1.0));
        assert_eq!(constant("^ x 0"), Some(1.0));
        assert_eq!(constant("^ x 2"), None);
        assert_eq!(constant("^ 2 x"), None);
        assert_eq!(as_constant(&Term::pow_scalar(Term::Scalar(3.0), 2.0)), Some(9.0));
        assert_eq!(as_constant(&Term::pow(Term::Scalar(2.0), Term::Variable)), None);
    }

    #[test]
    fn conditionals() {
        assert_eq!(constant("> 2 1 3 x"), Some(3.0));
        assert_eq!(constant("> 2 1 x 3"), None);
        assert_eq!(constant("> x 1 3 3"), None);
        assert_eq!(constant("<=> 1 0 1 5 x"), Some(5.0));
        assert_eq!(constant("<=> 2 0 1 5 x"), None);
    }
}
