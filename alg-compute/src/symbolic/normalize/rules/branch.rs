//! Normalization rules for conditionals.

use alg_parser::{parser::ast::{Compare, Range}, Term};
use crate::symbolic::{
    constant::scalar_value,
    normalize::step::Step,
    step_collector::StepCollector,
};

/// Replaces a comparison with constant comparands by the selected branch.
pub fn compare(compare: Compare, step_collector: &mut dyn StepCollector<Step>) -> Term {
    match (scalar_value(&compare.lhs), scalar_value(&compare.rhs)) {
        (Some(lhs), Some(rhs)) => {
            step_collector.push(Step::SelectBranch);
            if compare.op.holds(lhs, rhs) {
                *compare.then
            } else {
                *compare.otherwise
            }
        },
        _ => Term::Compare(compare),
    }
}

/// Replaces an interval test with constant value and bounds by the selected branch.
pub fn range(range: Range, step_collector: &mut dyn StepCollector<Step>) -> Term {
    let bounds = (
        scalar_value(&range.value),
        scalar_value(&range.low),
        scalar_value(&range.high),
    );

    match bounds {
        (Some(value), Some(low), Some(high)) => {
            step_collector.push(Step::SelectBranch);
            if Range::contains(value, low, high) {
                *range.inside
            } else {
                *range.outside
            }
        },
        _ => Term::Range(range),
    }
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
    fn constant_comparands_select_branch() {
        assert_eq!(normalize_str("> 2 1 sin + x 0 x"), Term::sin(x()));
        assert_eq!(normalize_str("< 2 1 sin x * x 1"), x());
        assert_eq!(normalize_str("== + 1 1 2 x 0"), x());
        assert_eq!(normalize_str("!= + 1 1 2 x 0"), Term::Scalar(0.0));
    }

    #[test]
    fn constant_range_selects_branch() {
        assert_eq!(normalize_str("<=> 1 1 2 x 0"), x());
        assert_eq!(normalize_str("<=> 3 1 2 0 cos x"), Term::cos(x()));
    }

    #[test]
    fn variable_comparands_are_kept() {
        assert_eq!(
            normalize_str("> x 1 + x 0 * 2 3"),
            Term::greater(x(), Term::Scalar(1.0), x(), Term::Scalar(6.0)),
        );
        assert_eq!(
            normalize_str("<=> x 0 + 1 1 x 0"),
            Term::range(x(), Term::Scalar(0.0), Term::Scalar(2.0), x(), Term::Scalar(0.0)),
        );
    }
}
