use crate::tokenizer::TokenKind;
use super::Term;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A comparison operator used by a [`Compare`] term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CmpOp {
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    Equal,
    NotEqual,
}

impl CmpOp {
    /// Every comparison operator, in catalogue order.
    pub const ALL: [CmpOp; 6] = [
        CmpOp::Greater,
        CmpOp::Less,
        CmpOp::GreaterEqual,
        CmpOp::LessEqual,
        CmpOp::Equal,
        CmpOp::NotEqual,
    ];

    /// Applies the comparison to two values. Any comparison involving NaN is false, except
    /// [`CmpOp::NotEqual`].
    pub fn holds(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Greater => lhs > rhs,
            Self::Less => lhs < rhs,
            Self::GreaterEqual => lhs >= rhs,
            Self::LessEqual => lhs <= rhs,
            Self::Equal => lhs == rhs,
            Self::NotEqual => lhs != rhs,
        }
    }

    /// Returns the token kind that introduces this comparison.
    pub fn token_kind(self) -> TokenKind {
        match self {
            Self::Greater => TokenKind::Greater,
            Self::Less => TokenKind::Less,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::LessEqual => TokenKind::LessEqual,
            Self::Equal => TokenKind::Equal,
            Self::NotEqual => TokenKind::NotEqual,
        }
    }

    /// Returns the comparison introduced by the given token kind, if any.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.token_kind() == kind)
    }
}

/// A conditional term that compares two terms and selects one of two branches.
///
/// Its value is `then` if `lhs op rhs` holds at the point of evaluation, and `otherwise` if not.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Compare {
    /// The comparison to apply.
    pub op: CmpOp,

    /// The left-hand comparand.
    pub lhs: Box<Term>,

    /// The right-hand comparand.
    pub rhs: Box<Term>,

    /// The branch selected when the comparison holds.
    pub then: Box<Term>,

    /// The branch selected when the comparison does not hold.
    pub otherwise: Box<Term>,
}

impl Compare {
    /// Returns the branch selected by the given comparand values.
    pub fn select(&self, lhs: f64, rhs: f64) -> &Term {
        if self.op.holds(lhs, rhs) {
            &self.then
        } else {
            &self.otherwise
        }
    }
}

/// A conditional term that tests whether a value lies in a closed interval.
///
/// Its value is `inside` if `low <= value <= high` at the point of evaluation, and `outside` if
/// not.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
    /// The tested value.
    pub value: Box<Term>,

    /// The lower bound, inclusive.
    pub low: Box<Term>,

    /// The upper bound, inclusive.
    pub high: Box<Term>,

    /// The branch selected when the value lies in the interval.
    pub inside: Box<Term>,

    /// The branch selected when the value lies outside the interval.
    pub outside: Box<Term>,
}

impl Range {
    /// Returns true if `value` lies in `[low, high]`.
    pub fn contains(value: f64, low: f64, high: f64) -> bool {
        low <= value && value <= high
    }

    /// Returns the branch selected by the given value and bounds.
    pub fn select(&self, value: f64, low: f64, high: f64) -> &Term {
        if Self::contains(value, low, high) {
            &self.inside
        } else {
            &self.outside
        }
    }
}
