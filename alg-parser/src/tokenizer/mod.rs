pub mod fmt;
pub mod token;
mod tokens;

use alg_error::Error;
use logos::Logos;
use std::ops::Range;
use tracing::{debug, trace};
use crate::parser::error::kind::UnknownToken;
pub use token::{Token, TokenKind, SYMBOLS};
pub use tokens::Tokens;

/// Splits the input on single spaces and classifies each field as one token.
///
/// Empty fields (produced by leading, trailing, or repeated spaces) are skipped. A field that is
/// not exactly one recognizable token results in an [`UnknownToken`] error pointing at that field.
/// The returned [`Tokens`] remembers the span of each field in `input`.
pub fn tokenize(input: &str) -> Result<Tokens, Error> {
    let mut tokens = Tokens::new();
    let mut start = 0;

    for field in input.split(' ') {
        let span = start..start + field.len();
        start = span.end + 1;

        if field.is_empty() {
            continue;
        }

        let token = lex_field(field, span.clone())?;
        trace!(?token, ?span, "lexed field");
        tokens.push_spanned(token, span);
    }

    debug!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

/// Classifies a single non-empty field.
fn lex_field(field: &str, span: Range<usize>) -> Result<Token, Error> {
    let unknown = || Error::new(vec![span.clone()], UnknownToken { lexeme: field.to_string() });

    let mut lexer = TokenKind::lexer(field);
    let kind = match lexer.next() {
        Some(Ok(kind)) if lexer.span().end == field.len() => kind,
        _ => return Err(unknown()),
    };

    let value = match kind {
        TokenKind::Scalar => Some(field.parse::<f64>().map_err(|_| unknown())?),
        TokenKind::ScaledVariable => {
            let coefficient = &field[..field.len() - 1];
            Some(match coefficient {
                "-" => -1.0,
                _ => coefficient.parse::<f64>().map_err(|_| unknown())?,
            })
        },
        _ => None,
    };

    Ok(Token { kind, value })
}
