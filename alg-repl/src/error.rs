use alg_attrs::ErrorKind;
use alg_error::{Error as AlgError, EXPR};
use ariadne::{Fmt, Source};

/// The argument of a REPL command could not be understood.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid argument for `:{}`", command),
    labels = [format!("expected {} here", expected.fg(EXPR))],
)]
pub struct InvalidArgument {
    /// The name of the command.
    pub command: &'static str,

    /// A description of the expected argument.
    pub expected: &'static str,
}

/// The REPL command is not known.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `:{}`", name),
    labels = ["this command"],
    help = format!("available commands: {}", ":x <number>, :precision <digits>, :steps".fg(EXPR)),
)]
pub struct UnknownCommand {
    /// The name that was given.
    pub name: String,
}

/// Utility type to package errors that can occur while processing a line.
pub struct Error(pub AlgError);

impl Error {
    /// Report the error to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        let report = self.0.build_report("input");
        if let Err(err) = report.eprint(("input", Source::from(input))) {
            eprintln!("failed to print error report: {}", err);
        }
    }
}

impl From<AlgError> for Error {
    fn from(err: AlgError) -> Self {
        Self(err)
    }
}
