use alg_attrs::ErrorKind;
use alg_error::EXPR;
use ariadne::Fmt;
use crate::tokenizer::TokenKind;

/// A field of the input did not match any token.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown token `{}`", lexeme),
    labels = ["this is not a number, a variable, or a known symbol"],
    help = format!("fields are separated by single spaces; write `{}` or `{}` for numbers", "2.50".fg(EXPR), "-3x".fg(EXPR)),
)]
pub struct UnknownToken {
    /// The text of the unrecognized field.
    pub lexeme: String,
}

/// A `+[` / `*[` list was never closed, or a `]+` / `]*` appeared without a matching opener.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unmatched bracket",
    labels = [if *opening {
        "this list is never closed"
    } else {
        "this does not close any list"
    }],
    help = if *opening {
        "close the list with `]+` for a sum or `]*` for a product"
    } else {
        "remove the closing bracket, or open a list before it with `+[` or `*[`"
    },
)]
pub struct UnmatchedBracket {
    /// The unmatched token was an opening bracket. (Otherwise, it was a closing bracket.)
    pub opening: bool,
}

/// The end of the input was reached while a term was still expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "term".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the input was expected after a complete term, but more tokens were found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("this {} is not part of the expression", "term".fg(EXPR))],
    help = "prefix notation needs exactly one root term; wrap several terms in `+[ ... ]+` to add them",
)]
pub struct ExpectedEof;

/// A token could not be turned into a term.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot parse token",
    labels = [format!("this {:?} token is malformed", found)],
    help = "numeric tokens must carry a value",
)]
pub struct ParseFailure {
    /// The kind of the token that could not be parsed.
    pub found: TokenKind,
}
