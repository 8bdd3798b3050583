//! Token model, tokenizer, expression tree and parser for single-variable algebra written in
//! prefix notation.
//!
//! ```
//! use alg_parser::{parse, tokenize, Term};
//!
//! let tokens = tokenize("+[ * 2.00 x sin x ]+").unwrap();
//! let term = parse(&tokens).unwrap();
//! assert_eq!(term, Term::sum(vec![
//!     Term::mul(Term::scalar(2.0), Term::variable()),
//!     Term::sin(Term::variable()),
//! ]));
//! assert_eq!(term.tokenize().to_string(), "+[ * 2.00 x sin x ]+ ");
//! ```

pub mod parser;
pub mod tokenizer;

pub use parser::{ast::Term, parse, parse_str, Parser};
pub use tokenizer::{fmt::FormatOptions, tokenize, Token, TokenKind, Tokens};

/// Runs `f`, first moving to a new stack segment if little of the current one is left.
///
/// The parser, the serializer and [`Term::depth`] recurse once per level of a term, so this keeps
/// deep terms from overflowing the thread's stack.
pub(crate) fn grow<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(64 * 1024, 2 * 1024 * 1024, f)
}
