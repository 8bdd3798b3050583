use logos::Logos;
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Each field of the input (text between single spaces) must lex to exactly one of these kinds.
/// Fixed symbols are listed in [`SYMBOLS`]; the `#[token]` attributes here must agree with it.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    #[regex(r"-?([0-9]+\.?[0-9]*|\.[0-9]+)")]
    Scalar,

    #[token("x")]
    Variable,

    #[regex(r"-?([0-9]+\.?[0-9]*|\.[0-9]+)x")]
    #[token("-x")]
    ScaledVariable,

    #[token("e")]
    Exp,

    #[token("^")]
    Power,

    #[token("ln")]
    Ln,

    #[token("sin")]
    Sin,

    #[token("cos")]
    Cos,

    #[token("tan")]
    Tan,

    #[token("sec")]
    Sec,

    #[token("csc")]
    Csc,

    #[token("cot")]
    Cot,

    #[token("sinh")]
    Sinh,

    #[token("cosh")]
    Cosh,

    #[token("tanh")]
    Tanh,

    #[token("sech")]
    Sech,

    #[token("csch")]
    Csch,

    #[token("coth")]
    Coth,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token(">")]
    Greater,

    #[token("<")]
    Less,

    #[token(">=")]
    GreaterEqual,

    #[token("<=")]
    LessEqual,

    #[token("==")]
    Equal,

    #[token("!=")]
    NotEqual,

    #[token("<=>")]
    Range,

    #[token("+[")]
    SumOpen,

    #[token("]+")]
    SumClose,

    #[token("*[")]
    ProductOpen,

    #[token("]*")]
    ProductClose,
}

/// The fixed symbol of every token kind that has one. [`TokenKind::Scalar`] and
/// [`TokenKind::ScaledVariable`] are written as numeric literals instead.
pub const SYMBOLS: [(TokenKind, &str); 31] = [
    (TokenKind::Variable, "x"),
    (TokenKind::Exp, "e"),
    (TokenKind::Power, "^"),
    (TokenKind::Ln, "ln"),
    (TokenKind::Sin, "sin"),
    (TokenKind::Cos, "cos"),
    (TokenKind::Tan, "tan"),
    (TokenKind::Sec, "sec"),
    (TokenKind::Csc, "csc"),
    (TokenKind::Cot, "cot"),
    (TokenKind::Sinh, "sinh"),
    (TokenKind::Cosh, "cosh"),
    (TokenKind::Tanh, "tanh"),
    (TokenKind::Sech, "sech"),
    (TokenKind::Csch, "csch"),
    (TokenKind::Coth, "coth"),
    (TokenKind::Add, "+"),
    (TokenKind::Sub, "-"),
    (TokenKind::Mul, "*"),
    (TokenKind::Div, "/"),
    (TokenKind::Greater, ">"),
    (TokenKind::Less, "<"),
    (TokenKind::GreaterEqual, ">="),
    (TokenKind::LessEqual, "<="),
    (TokenKind::Equal, "=="),
    (TokenKind::NotEqual, "!="),
    (TokenKind::Range, "<=>"),
    (TokenKind::SumOpen, "+["),
    (TokenKind::SumClose, "]+"),
    (TokenKind::ProductOpen, "*["),
    (TokenKind::ProductClose, "]*"),
];

/// Reverse lookup table from symbol to token kind, built once from [`SYMBOLS`].
static KIND_BY_SYMBOL: Lazy<HashMap<&'static str, TokenKind>> =
    Lazy::new(|| SYMBOLS.iter().map(|&(kind, symbol)| (symbol, kind)).collect());

impl TokenKind {
    /// Returns the fixed symbol of this token kind, or [`None`] for the numeric kinds.
    pub fn symbol(self) -> Option<&'static str> {
        SYMBOLS.iter()
            .find(|(kind, _)| *kind == self)
            .map(|&(_, symbol)| symbol)
    }

    /// Returns the token kind with the given fixed symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        KIND_BY_SYMBOL.get(symbol).copied()
    }

    /// Returns true if tokens of this kind carry a numeric payload.
    pub fn has_value(self) -> bool {
        matches!(self, Self::Scalar | Self::ScaledVariable)
    }
}

/// A single token: a kind plus the numeric payload used by [`TokenKind::Scalar`] and
/// [`TokenKind::ScaledVariable`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,

    /// The numeric payload, if any.
    pub value: Option<f64>,
}

impl Token {
    /// Creates a token without a payload.
    pub fn new(kind: TokenKind) -> Self {
        Self { kind, value: None }
    }

    /// Creates a [`TokenKind::Scalar`] token.
    pub fn scalar(value: f64) -> Self {
        Self { kind: TokenKind::Scalar, value: Some(value) }
    }

    /// Creates a [`TokenKind::ScaledVariable`] token with the given coefficient.
    pub fn scaled_variable(coefficient: f64) -> Self {
        Self { kind: TokenKind::ScaledVariable, value: Some(coefficient) }
    }
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Self {
        Self::new(kind)
    }
}
