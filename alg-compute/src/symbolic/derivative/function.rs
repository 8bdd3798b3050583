//! Symbolic derivatives of the unary functions, with the chain rule applied.

use alg_parser::{parser::ast::Func, Term};
use super::differentiate;

/// Computes the derivative of `func(arg)` as a product that includes `arg'`.
pub(super) fn function_derivative(func: Func, arg: &Term) -> Term {
    let inner = differentiate(arg);
    let f = |func: Func| Term::func(func, arg.clone());
    let neg = || Term::Scalar(-1.0);

    let factors = match func {
        Func::Exp => vec![inner, f(Func::Exp)],

        // `(ln a)' = a' / a`
        Func::Ln => return Term::div(inner, arg.clone()),

        Func::Sin => vec![inner, f(Func::Cos)],
        Func::Cos => vec![neg(), inner, f(Func::Sin)],
        Func::Tan => vec![inner, f(Func::Sec), f(Func::Sec)],
        Func::Sec => vec![inner, f(Func::Sec), f(Func::Tan)],
        Func::Csc => vec![neg(), inner, f(Func::Csc), f(Func::Cot)],
        Func::Cot => vec![neg(), inner, f(Func::Csc), f(Func::Csc)],

        Func::Sinh => vec![inner, f(Func::Cosh)],
        Func::Cosh => vec![inner, f(Func::Sinh)],
        Func::Tanh => vec![inner, f(Func::Sech), f(Func::Sech)],
        Func::Sech => vec![neg(), inner, f(Func::Sech), f(Func::Tanh)],
        Func::Csch => vec![neg(), inner, f(Func::Csch), f(Func::Coth)],
        Func::Coth => vec![neg(), inner, f(Func::Csch), f(Func::Csch)],
    };

    Term::Product(factors)
}
