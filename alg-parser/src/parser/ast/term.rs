use crate::grow;
use super::{CmpOp, Compare, Func, Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an expression tree in the single free variable `x`.
///
/// Every composite term exclusively owns its children. Trees are built with the named
/// constructors ([`Term::add`], [`Term::sin`], ...), or parsed from prefix notation with
/// [`parse`](crate::parse).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Term {
    /// A constant.
    Scalar(f64),

    /// The free variable `x`.
    Variable,

    /// The free variable multiplied by a coefficient, `c * x`.
    ScaledVariable(f64),

    /// A unary function applied to a term, such as `sin t`.
    Func(Func, Box<Term>),

    /// A term raised to the power of a term, `a ^ b`.
    TermToTerm(Box<Term>, Box<Term>),

    /// A term raised to a constant power, `a ^ p`.
    TermToScalar(Box<Term>, f64),

    /// A constant raised to the power of a term, `v ^ b`.
    ScalarToTerm(f64, Box<Term>),

    /// `a + b`.
    Add(Box<Term>, Box<Term>),

    /// `a - b`.
    Sub(Box<Term>, Box<Term>),

    /// `a * b`.
    Mul(Box<Term>, Box<Term>),

    /// A numerator divided by a denominator.
    Div(Box<Term>, Box<Term>),

    /// The sum of any number of terms. The empty sum is 0.
    Sum(Vec<Term>),

    /// The product of any number of terms. The empty product is 1.
    Product(Vec<Term>),

    /// A comparison between two terms that selects one of two branches.
    Compare(Compare),

    /// A closed-interval test that selects one of two branches.
    Range(Range),
}

/// Constructors for each kind of term.
impl Term {
    pub fn scalar(value: f64) -> Self {
        Self::Scalar(value)
    }

    pub fn variable() -> Self {
        Self::Variable
    }

    pub fn scaled_variable(coefficient: f64) -> Self {
        Self::ScaledVariable(coefficient)
    }

    /// Applies the given function to a term.
    pub fn func(func: Func, arg: Term) -> Self {
        Self::Func(func, Box::new(arg))
    }

    pub fn exp(arg: Term) -> Self {
        Self::func(Func::Exp, arg)
    }

    pub fn ln(arg: Term) -> Self {
        Self::func(Func::Ln, arg)
    }

    pub fn sin(arg: Term) -> Self {
        Self::func(Func::Sin, arg)
    }

    pub fn cos(arg: Term) -> Self {
        Self::func(Func::Cos, arg)
    }

    pub fn tan(arg: Term) -> Self {
        Self::func(Func::Tan, arg)
    }

    pub fn sec(arg: Term) -> Self {
        Self::func(Func::Sec, arg)
    }

    pub fn csc(arg: Term) -> Self {
        Self::func(Func::Csc, arg)
    }

    pub fn cot(arg: Term) -> Self {
        Self::func(Func::Cot, arg)
    }

    pub fn sinh(arg: Term) -> Self {
        Self::func(Func::Sinh, arg)
    }

    pub fn cosh(arg: Term) -> Self {
        Self::func(Func::Cosh, arg)
    }

    pub fn tanh(arg: Term) -> Self {
        Self::func(Func::Tanh, arg)
    }

    pub fn sech(arg: Term) -> Self {
        Self::func(Func::Sech, arg)
    }

    pub fn csch(arg: Term) -> Self {
        Self::func(Func::Csch, arg)
    }

    pub fn coth(arg: Term) -> Self {
        Self::func(Func::Coth, arg)
    }

    /// `base ^ exponent`, where both are terms.
    pub fn pow(base: Term, exponent: Term) -> Self {
        Self::TermToTerm(Box::new(base), Box::new(exponent))
    }

    /// `base ^ exponent`, where the exponent is a constant.
    pub fn pow_scalar(base: Term, exponent: f64) -> Self {
        Self::TermToScalar(Box::new(base), exponent)
    }

    /// `base ^ exponent`, where the base is a constant.
    pub fn scalar_pow(base: f64, exponent: Term) -> Self {
        Self::ScalarToTerm(base, Box::new(exponent))
    }

    pub fn add(a: Term, b: Term) -> Self {
        Self::Add(Box::new(a), Box::new(b))
    }

    pub fn sub(a: Term, b: Term) -> Self {
        Self::Sub(Box::new(a), Box::new(b))
    }

    pub fn mul(a: Term, b: Term) -> Self {
        Self::Mul(Box::new(a), Box::new(b))
    }

    pub fn div(numerator: Term, denominator: Term) -> Self {
        Self::Div(Box::new(numerator), Box::new(denominator))
    }

    pub fn sum(terms: Vec<Term>) -> Self {
        Self::Sum(terms)
    }

    pub fn product(factors: Vec<Term>) -> Self {
        Self::Product(factors)
    }

    /// A conditional that selects `then` if `lhs op rhs` holds, and `otherwise` if not.
    pub fn compare(op: CmpOp, lhs: Term, rhs: Term, then: Term, otherwise: Term) -> Self {
        Self::Compare(Compare {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        })
    }

    pub fn greater(lhs: Term, rhs: Term, then: Term, otherwise: Term) -> Self {
        Self::compare(CmpOp::Greater, lhs, rhs, then, otherwise)
    }

    pub fn less(lhs: Term, rhs: Term, then: Term, otherwise: Term) -> Self {
        Self::compare(CmpOp::Less, lhs, rhs, then, otherwise)
    }

    pub fn greater_equal(lhs: Term, rhs: Term, then: Term, otherwise: Term) -> Self {
        Self::compare(CmpOp::GreaterEqual, lhs, rhs, then, otherwise)
    }

    pub fn less_equal(lhs: Term, rhs: Term, then: Term, otherwise: Term) -> Self {
        Self::compare(CmpOp::LessEqual, lhs, rhs, then, otherwise)
    }

    pub fn equal(lhs: Term, rhs: Term, then: Term, otherwise: Term) -> Self {
        Self::compare(CmpOp::Equal, lhs, rhs, then, otherwise)
    }

    pub fn not_equal(lhs: Term, rhs: Term, then: Term, otherwise: Term) -> Self {
        Self::compare(CmpOp::NotEqual, lhs, rhs, then, otherwise)
    }

    /// A conditional that selects `inside` if `low <= value <= high` holds, and `outside` if
    /// not.
    pub fn range(value: Term, low: Term, high: Term, inside: Term, outside: Term) -> Self {
        Self::Range(Range {
            value: Box::new(value),
            low: Box::new(low),
            high: Box::new(high),
            inside: Box::new(inside),
            outside: Box::new(outside),
        })
    }
}

impl Term {
    /// Returns one representative instance of every kind of term.
    ///
    /// Frameworks that encode trees generically can use this as the closed set of variants.
    pub fn catalogue() -> Vec<Term> {
        let x = Term::variable;

        let mut terms = vec![
            Term::scalar(0.0),
            Term::variable(),
            Term::scaled_variable(1.0),
            Term::exp(x()),
            Term::ln(x()),
            Term::pow(x(), x()),
            Term::pow_scalar(x(), 2.0),
            Term::scalar_pow(2.0, x()),
            Term::sum(vec![x(), x()]),
            Term::product(vec![x(), x()]),
            Term::div(x(), x()),
            Term::add(x(), x()),
            Term::sub(x(), x()),
            Term::mul(x(), x()),
        ];

        // exp and ln were listed above
        terms.extend(Func::ALL[2..].iter().map(|&func| Term::func(func, x())));
        terms.extend(CmpOp::ALL.iter().map(|&op| Term::compare(op, x(), x(), x(), x())));
        terms.push(Term::range(x(), x(), x(), x(), x()));
        terms
    }

    /// Returns the direct children of this term, in the order they are written in prefix
    /// notation.
    pub fn children(&self) -> Vec<&Term> {
        match self {
            Self::Scalar(_) | Self::Variable | Self::ScaledVariable(_) => Vec::new(),
            Self::Func(_, arg) => vec![&**arg],
            Self::TermToScalar(base, _) => vec![&**base],
            Self::ScalarToTerm(_, exponent) => vec![&**exponent],
            Self::TermToTerm(a, b)
                | Self::Add(a, b)
                | Self::Sub(a, b)
                | Self::Mul(a, b)
                | Self::Div(a, b) => vec![&**a, &**b],
            Self::Sum(terms) | Self::Product(terms) => terms.iter().collect(),
            Self::Compare(compare) => vec![&*compare.lhs, &*compare.rhs, &*compare.then, &*compare.otherwise],
            Self::Range(range) => vec![&*range.value, &*range.low, &*range.high, &*range.inside, &*range.outside],
        }
    }

    /// Returns the depth of the tree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        grow(|| 1 + self.children()
            .into_iter()
            .map(Term::depth)
            .max()
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_every_variant() {
        let catalogue = Term::catalogue();
        assert_eq!(catalogue.len(), 33);
        assert_eq!(catalogue[0], Term::Scalar(0.0));
        assert_eq!(catalogue[14], Term::sin(Term::Variable));
        assert_eq!(catalogue[20], Term::sinh(Term::Variable));
        assert_eq!(catalogue[26], Term::greater(Term::Variable, Term::Variable, Term::Variable, Term::Variable));
        assert!(matches!(catalogue[32], Term::Range(_)));
    }

    #[test]
    fn depth() {
        assert_eq!(Term::Variable.depth(), 1);
        assert_eq!(Term::sin(Term::add(Term::Variable, Term::exp(Term::Variable))).depth(), 4);
        assert_eq!(Term::sum(vec![]).depth(), 1);
    }
}
