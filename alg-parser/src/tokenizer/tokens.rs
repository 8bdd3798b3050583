use std::{fmt::{Display, Formatter}, ops::{Index, Range}, slice::Iter};
use super::{fmt::{FormatOptions, TokensFormatter}, Token};

/// An ordered sequence of tokens; the wire format of a [`Term`](crate::parser::ast::Term).
///
/// A sequence produced by [`tokenize`](super::tokenize) remembers where each token came from in
/// the source text, so that errors can point at it. Sequences built any other way have no
/// recorded spans; their spans are computed against the canonical display string instead (see
/// [`Tokens::span`]).
#[derive(Debug, Clone, Default)]
pub struct Tokens {
    tokens: Vec<Token>,

    /// Source spans, one per token, or empty if the sequence was not produced by the tokenizer.
    spans: Vec<Range<usize>>,
}

impl Tokens {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token. Any recorded source spans are discarded, since the sequence no longer
    /// matches the source text.
    pub fn push(&mut self, token: impl Into<Token>) {
        self.spans.clear();
        self.tokens.push(token.into());
    }

    /// Appends a token that originated from the given region of the source text.
    pub(crate) fn push_spanned(&mut self, token: Token, span: Range<usize>) {
        debug_assert_eq!(self.tokens.len(), self.spans.len());
        self.tokens.push(token);
        self.spans.push(span);
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the tokens as a slice.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns an iterator over the tokens.
    pub fn iter(&self) -> Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Returns the region of text occupied by the token at `index`.
    ///
    /// This is the recorded source span if the sequence came from the tokenizer; otherwise it is
    /// the position of the token in the default display string. An index past the end returns
    /// the empty span at the end of the text.
    pub fn span(&self, index: usize) -> Range<usize> {
        if let Some(span) = self.spans.get(index) {
            return span.clone();
        }

        if !self.spans.is_empty() {
            return self.eof_span();
        }

        // each token is followed by a single space
        let mut start = 0;
        for (i, token) in self.tokens.iter().enumerate() {
            let len = token.to_string().len();
            if i == index {
                return start..start + len;
            }
            start += len + 1;
        }
        start..start
    }

    /// Returns the empty span just after the last token.
    pub fn eof_span(&self) -> Range<usize> {
        match self.spans.last() {
            Some(span) => span.end..span.end,
            None => match self.tokens.len() {
                0 => 0..0,
                len => {
                    let end = self.span(len - 1).end;
                    end..end
                },
            },
        }
    }

    /// Wraps the sequence in a formatter that displays it with the given options.
    pub fn display_with(&self, options: FormatOptions) -> TokensFormatter<'_> {
        TokensFormatter { tokens: self, options }
    }
}

/// Two sequences are equal if they contain the same tokens; spans are not compared.
impl PartialEq for Tokens {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Index<usize> for Tokens {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens, spans: Vec::new() }
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<Token> for Tokens {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.spans.clear();
        self.tokens.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Displays each token by its canonical symbol, or as a number with two decimals, each followed
/// by a single space.
impl Display for Tokens {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        self.display_with(FormatOptions::default()).fmt(f)
    }
}
