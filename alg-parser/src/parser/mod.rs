pub mod ast;
pub mod error;
pub mod fmt;
mod term;

use ast::Term;
use error::{kind, Error, ErrorKind};
use std::ops::Range;
use tracing::debug;
use crate::tokenizer::{tokenize, Token, Tokens};

/// A recursive-descent parser over a sequence of tokens in prefix notation.
///
/// The arity of every operator is fixed by its token kind, so no separators are needed, except
/// for the bracketed `+[ ... ]+` and `*[ ... ]*` lists.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    /// The tokens that this parser is currently parsing.
    tokens: &'a Tokens,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given tokens.
    pub fn new(tokens: &'a Tokens) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Returns the index of the next token to be parsed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true if every token has been consumed.
    pub fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Creates an error that points at the current token, or the end of the input if the cursor
    /// is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Creates an error that points at the token with the given index.
    pub fn error_at(&self, index: usize, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.tokens.span(index)], kind)
    }

    /// Returns a span pointing at the end of the input.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.eof_span()
    }

    /// Returns the span of the current token, or the end of the input if the cursor is at the end
    /// of the stream.
    pub fn span(&self) -> Range<usize> {
        if self.is_eof() {
            self.eof_span()
        } else {
            self.tokens.span(self.cursor)
        }
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&'a Token> {
        self.tokens.as_slice().get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        match self.current_token() {
            Some(&token) => {
                self.cursor += 1;
                Ok(token)
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Parses a value from the stream. If parsing fails, the cursor is moved back to where it
    /// was before the attempt.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Parses exactly one term, leaving the cursor just after it.
    pub fn parse_term(&mut self) -> Result<Term, Error> {
        self.try_parse()
    }

    /// Attempts to parse a value from the stream. All the tokens must be consumed by the parser;
    /// if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        if self.is_eof() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a stream of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// Parses a complete term from the given tokens. Every token must be consumed.
pub fn parse(tokens: &Tokens) -> Result<Term, Error> {
    let term = Parser::new(tokens).try_parse_full::<Term>()?;
    debug!(tokens = tokens.len(), depth = term.depth(), "parsed term");
    Ok(term)
}

/// Tokenizes and parses a complete term from the given text.
pub fn parse_str(input: &str) -> Result<Term, Error> {
    parse(&tokenize(input)?)
}
