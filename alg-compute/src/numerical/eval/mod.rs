mod branch;
mod term;

/// Any type that can be evaluated at a value of the free variable `x`.
pub trait Eval {
    /// Evaluates the term at the given value of `x`.
    fn eval(&self, x: f64) -> f64;
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use alg_parser::{parse_str, Term};
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use super::*;

    fn eval_str(input: &str, x: f64) -> f64 {
        parse_str(input).unwrap().eval(x)
    }

    #[test]
    fn leaves() {
        assert_eq!(eval_str("2.5", 7.0), 2.5);
        assert_eq!(eval_str("x", 7.0), 7.0);
        assert_eq!(eval_str("-3x", 2.0), -6.0);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval_str("+ x 1", 2.0), 3.0);
        assert_eq!(eval_str("- x 1", 2.0), 1.0);
        assert_eq!(eval_str("* x 3", 2.0), 6.0);
        assert_eq!(eval_str("/ 1 x", 4.0), 0.25);
        assert_eq!(eval_str("+[ x 1 2 ]+", 2.0), 5.0);
        assert_eq!(eval_str("*[ x 3 2 ]*", 2.0), 12.0);
    }

    #[test]
    fn empty_lists() {
        assert_eq!(Term::sum(vec![]).eval(3.0), 0.0);
        assert!(Term::sum(vec![]).eval(3.0).is_sign_positive());
        assert!(eval_str("+[ -0 ]+", 1.0).is_sign_positive());
        assert_eq!(Term::product(vec![]).eval(3.0), 1.0);
    }

    #[test]
    fn powers() {
        assert_eq!(eval_str("^ x 2", 3.0), 9.0);
        assert_eq!(eval_str("^ 2 x", 3.0), 8.0);
        assert_eq!(eval_str("^ x x", 2.0), 4.0);
    }

    #[test]
    fn functions() {
        assert_float_absolute_eq!(eval_str("sin x", 1.0), 1.0f64.sin(), 1e-12);
        assert_float_absolute_eq!(eval_str("ln e x", 1.5), 1.5, 1e-12);
        assert_float_absolute_eq!(eval_str("sech x", 0.5), 1.0 / 0.5f64.cosh(), 1e-12);
    }

    #[test]
    fn comparisons() {
        assert_eq!(eval_str("> x 0 1 -1", 2.0), 1.0);
        assert_eq!(eval_str("> x 0 1 -1", 0.0), -1.0);
        assert_eq!(eval_str(">= x 0 1 -1", 0.0), 1.0);
        assert_eq!(eval_str("< x 0 1 -1", -1.0), 1.0);
        assert_eq!(eval_str("<= x 0 1 -1", 1.0), -1.0);
        assert_eq!(eval_str("== x 2 1 -1", 2.0), 1.0);
        assert_eq!(eval_str("!= x 2 1 -1", 2.0), -1.0);
    }

    #[test]
    fn range_is_inclusive() {
        let term = parse_str("<=> x 0 1 x -1").unwrap();
        assert_eq!(term.eval(0.0), 0.0);
        assert_eq!(term.eval(0.5), 0.5);
        assert_eq!(term.eval(1.0), 1.0);
        assert_eq!(term.eval(1.5), -1.0);
        assert_eq!(term.eval(-0.5), -1.0);
    }

    #[test]
    fn only_selected_branch_matters() {
        // the other branch is infinite at this point, but is not selected
        assert_eq!(eval_str("> x 0 x / 1 0", 2.0), 2.0);
    }

    #[test]
    fn domain_errors_propagate() {
        assert_eq!(eval_str("/ 1 x", 0.0), f64::INFINITY);
        assert!(eval_str("ln x", -1.0).is_nan());
        assert!(eval_str("+ 1 ln x", -1.0).is_nan());
        // NaN comparands select the else branch, except for `!=`
        assert_eq!(eval_str("== ln x ln x 1 2", -1.0), 2.0);
        assert_eq!(eval_str("!= ln x ln x 1 2", -1.0), 1.0);
    }
}
