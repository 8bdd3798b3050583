//! Serialization of terms back into prefix notation.

use crate::{grow, tokenizer::{Token, TokenKind, Tokens}};
use std::fmt::{Display, Formatter, Result};
use super::ast::Term;

impl Term {
    /// Converts the term into the sequence of tokens that [`parse`](crate::parse) reads back
    /// into the same term.
    ///
    /// Each node writes its own token first, followed by its children in the order the parser
    /// expects them.
    pub fn tokenize(&self) -> Tokens {
        let mut tokens = Vec::new();
        self.write_tokens(&mut tokens);
        tokens.into()
    }

    fn write_tokens(&self, out: &mut Vec<Token>) {
        grow(|| match self {
            Self::Scalar(value) => out.push(Token::scalar(*value)),
            Self::Variable => out.push(Token::new(TokenKind::Variable)),
            Self::ScaledVariable(coefficient) => out.push(Token::scaled_variable(*coefficient)),
            Self::Func(func, arg) => {
                out.push(Token::new(func.token_kind()));
                arg.write_tokens(out);
            },
            Self::TermToTerm(base, exponent) => {
                out.push(Token::new(TokenKind::Power));
                base.write_tokens(out);
                exponent.write_tokens(out);
            },
            Self::TermToScalar(base, exponent) => {
                out.push(Token::new(TokenKind::Power));
                base.write_tokens(out);
                out.push(Token::scalar(*exponent));
            },
            Self::ScalarToTerm(base, exponent) => {
                out.push(Token::new(TokenKind::Power));
                out.push(Token::scalar(*base));
                exponent.write_tokens(out);
            },
            Self::Add(a, b) => write_binary(out, TokenKind::Add, a, b),
            Self::Sub(a, b) => write_binary(out, TokenKind::Sub, a, b),
            Self::Mul(a, b) => write_binary(out, TokenKind::Mul, a, b),
            Self::Div(a, b) => write_binary(out, TokenKind::Div, a, b),
            Self::Sum(terms) => write_list(out, TokenKind::SumOpen, terms, TokenKind::SumClose),
            Self::Product(factors) => write_list(out, TokenKind::ProductOpen, factors, TokenKind::ProductClose),
            Self::Compare(compare) => {
                out.push(Token::new(compare.op.token_kind()));
                for term in [&compare.lhs, &compare.rhs, &compare.then, &compare.otherwise] {
                    term.write_tokens(out);
                }
            },
            Self::Range(range) => {
                out.push(Token::new(TokenKind::Range));
                for term in [&range.value, &range.low, &range.high, &range.inside, &range.outside] {
                    term.write_tokens(out);
                }
            },
        })
    }
}

fn write_binary(out: &mut Vec<Token>, kind: TokenKind, a: &Term, b: &Term) {
    out.push(Token::new(kind));
    a.write_tokens(out);
    b.write_tokens(out);
}

fn write_list(out: &mut Vec<Token>, open: TokenKind, terms: &[Term], close: TokenKind) {
    out.push(Token::new(open));
    for term in terms {
        term.write_tokens(out);
    }
    out.push(Token::new(close));
}

/// Displays the term in prefix notation, exactly as its [`Tokens`] would be displayed.
impl Display for Term {
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.tokenize().fmt(f)
    }
}
