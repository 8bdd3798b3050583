use crate::{grow, tokenizer::{Token, TokenKind}};
use super::{
    ast::{CmpOp, Func, Term},
    error::{kind::{ParseFailure, UnexpectedEof, UnmatchedBracket}, Error},
    Parse,
    Parser,
};
use tracing::trace;

impl Parse for Term {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        grow(|| term(input))
    }
}

/// Parses one term. Operands are parsed with [`Term::parse`] directly; only the outermost call
/// made through [`Parser::parse_term`] rewinds on failure.
fn term(input: &mut Parser) -> Result<Term, Error> {
    let start = input.cursor();
    let token = input.next_token()?;
    trace!(kind = ?token.kind, index = start, "parsing term");

    let term = match token.kind {
        TokenKind::Scalar => Term::Scalar(payload(input, start, token)?),
        TokenKind::Variable => Term::Variable,
        TokenKind::ScaledVariable => Term::ScaledVariable(payload(input, start, token)?),
        TokenKind::Power => {
            let base = Term::parse(input)?;
            let exponent = Term::parse(input)?;
            power(base, exponent)
        },
        TokenKind::Add => Term::add(Term::parse(input)?, Term::parse(input)?),
        TokenKind::Sub => Term::sub(Term::parse(input)?, Term::parse(input)?),
        TokenKind::Mul => Term::mul(Term::parse(input)?, Term::parse(input)?),
        TokenKind::Div => Term::div(Term::parse(input)?, Term::parse(input)?),
        TokenKind::Range => Term::range(
            Term::parse(input)?,
            Term::parse(input)?,
            Term::parse(input)?,
            Term::parse(input)?,
            Term::parse(input)?,
        ),
        TokenKind::SumOpen => Term::Sum(parse_list(input, start, TokenKind::SumClose)?),
        TokenKind::ProductOpen => Term::Product(parse_list(input, start, TokenKind::ProductClose)?),
        TokenKind::SumClose | TokenKind::ProductClose => {
            return Err(input.error_at(start, UnmatchedBracket { opening: false }));
        },
        kind => {
            if let Some(func) = Func::from_token_kind(kind) {
                Term::func(func, Term::parse(input)?)
            } else if let Some(op) = CmpOp::from_token_kind(kind) {
                Term::compare(
                    op,
                    Term::parse(input)?,
                    Term::parse(input)?,
                    Term::parse(input)?,
                    Term::parse(input)?,
                )
            } else {
                return Err(input.error_at(start, ParseFailure { found: kind }));
            }
        },
    };

    Ok(term)
}

/// Returns the numeric payload of a token, which must be present.
fn payload(input: &Parser, index: usize, token: Token) -> Result<f64, Error> {
    token.value.ok_or_else(|| input.error_at(index, ParseFailure { found: token.kind }))
}

/// Picks the power variant from the shape of its operands. A bare constant exponent makes a
/// [`Term::TermToScalar`], a bare constant base makes a [`Term::ScalarToTerm`], and anything else
/// (including two constants) makes a [`Term::TermToTerm`].
fn power(base: Term, exponent: Term) -> Term {
    match (base, exponent) {
        (base @ Term::Scalar(_), exponent @ Term::Scalar(_)) => Term::pow(base, exponent),
        (base, Term::Scalar(p)) => Term::pow_scalar(base, p),
        (Term::Scalar(v), exponent) => Term::scalar_pow(v, exponent),
        (base, exponent) => Term::pow(base, exponent),
    }
}

/// Parses the terms of a bracketed list up to and including the closing token. `open` is the
/// index of the opening token.
fn parse_list(input: &mut Parser, open: usize, close: TokenKind) -> Result<Vec<Term>, Error> {
    let unclosed = |input: &Parser| input.error_at(open, UnmatchedBracket { opening: true });
    let mut terms = Vec::new();

    loop {
        match input.current_token() {
            None => return Err(unclosed(input)),
            Some(token) if token.kind == close => {
                input.next_token()?;
                return Ok(terms);
            },
            Some(_) => match Term::parse(input) {
                Ok(term) => terms.push(term),
                Err(err) if err.is::<UnexpectedEof>() => return Err(unclosed(input)),
                Err(err) => return Err(err),
            },
        }
    }
}
