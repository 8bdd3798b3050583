use std::fmt::{Display, Formatter, Result};
use super::{Token, TokenKind, Tokens};

/// Formatting options for displaying token sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// The number of digits after the decimal point used for [`TokenKind::Scalar`] and
    /// [`TokenKind::ScaledVariable`] payloads.
    ///
    /// This option only controls display. Token payloads always keep full `f64` precision, so
    /// parsing a [`Tokens`] value round-trips exactly, while parsing its displayed text only
    /// round-trips up to this precision.
    pub precision: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl FormatOptions {
    /// Wraps the given [`FormatOptions`] into a builder for further customization.
    pub fn into_builder(self) -> FormatOptionsBuilder {
        FormatOptionsBuilder(self)
    }
}

/// Builder for [`FormatOptions`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptionsBuilder(FormatOptions);

impl FormatOptionsBuilder {
    /// Creates a builder starting from the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of digits shown after the decimal point.
    pub fn precision(mut self, precision: usize) -> Self {
        self.0.precision = precision;
        self
    }

    /// Builds the [`FormatOptions`].
    pub fn build(self) -> FormatOptions {
        self.0
    }
}

/// Writes a single token without the trailing separator.
pub(crate) fn fmt_token(f: &mut Formatter, token: &Token, options: FormatOptions) -> Result {
    let precision = options.precision;
    match token.kind {
        TokenKind::Scalar => write!(f, "{:.*}", precision, token.value.unwrap_or_default()),
        TokenKind::ScaledVariable => write!(f, "{:.*}x", precision, token.value.unwrap_or_default()),
        kind => f.write_str(kind.symbol().unwrap_or_default()),
    }
}

/// A wrapper type that displays a [`Tokens`] sequence with the given [`FormatOptions`].
pub struct TokensFormatter<'a> {
    pub(crate) tokens: &'a Tokens,
    pub(crate) options: FormatOptions,
}

impl Display for TokensFormatter<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        for token in self.tokens.iter() {
            fmt_token(f, token, self.options)?;
            f.write_str(" ")?;
        }
        Ok(())
    }
}

/// Displays a single token with the default options.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> Result {
        fmt_token(f, self, FormatOptions::default())
    }
}
