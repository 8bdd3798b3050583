use alg_parser::Term;
use crate::{grow, numerical::func::apply};
use super::Eval;

impl Eval for Term {
    fn eval(&self, x: f64) -> f64 {
        grow(|| match self {
            Term::Scalar(value) => *value,
            Term::Variable => x,
            Term::ScaledVariable(coefficient) => coefficient * x,
            Term::Func(func, arg) => apply(*func, arg.eval(x)),
            Term::TermToTerm(base, exponent) => base.eval(x).powf(exponent.eval(x)),
            Term::TermToScalar(base, exponent) => base.eval(x).powf(*exponent),
            Term::ScalarToTerm(base, exponent) => base.powf(exponent.eval(x)),
            Term::Add(a, b) => a.eval(x) + b.eval(x),
            Term::Sub(a, b) => a.eval(x) - b.eval(x),
            Term::Mul(a, b) => a.eval(x) * b.eval(x),
            Term::Div(numerator, denominator) => numerator.eval(x) / denominator.eval(x),
            Term::Sum(terms) => terms.iter().fold(0.0, |total, term| total + term.eval(x)),
            Term::Product(factors) => factors.iter().fold(1.0, |total, factor| total * factor.eval(x)),
            Term::Compare(compare) => compare.eval(x),
            Term::Range(range) => range.eval(x),
        })
    }
}
