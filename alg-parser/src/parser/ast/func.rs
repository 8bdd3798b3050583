use crate::tokenizer::TokenKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary function of one term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    /// The natural exponential function, `e^t`.
    Exp,

    /// The natural logarithm.
    Ln,

    Sin,
    Cos,
    Tan,
    Sec,
    Csc,
    Cot,

    Sinh,
    Cosh,
    Tanh,
    Sech,
    Csch,
    Coth,
}

impl Func {
    /// Every function, in catalogue order.
    pub const ALL: [Func; 14] = [
        Func::Exp,
        Func::Ln,
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Sec,
        Func::Csc,
        Func::Cot,
        Func::Sinh,
        Func::Cosh,
        Func::Tanh,
        Func::Sech,
        Func::Csch,
        Func::Coth,
    ];

    /// Returns the token kind that introduces this function.
    pub fn token_kind(self) -> TokenKind {
        match self {
            Self::Exp => TokenKind::Exp,
            Self::Ln => TokenKind::Ln,
            Self::Sin => TokenKind::Sin,
            Self::Cos => TokenKind::Cos,
            Self::Tan => TokenKind::Tan,
            Self::Sec => TokenKind::Sec,
            Self::Csc => TokenKind::Csc,
            Self::Cot => TokenKind::Cot,
            Self::Sinh => TokenKind::Sinh,
            Self::Cosh => TokenKind::Cosh,
            Self::Tanh => TokenKind::Tanh,
            Self::Sech => TokenKind::Sech,
            Self::Csch => TokenKind::Csch,
            Self::Coth => TokenKind::Coth,
        }
    }

    /// Returns the function introduced by the given token kind, if any.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.token_kind() == kind)
    }
}
