mod error;

use alg_compute::{numerical::Eval, symbolic::{normalize_with_steps, Step, Symbolic}};
use alg_error::Error as AlgError;
use alg_parser::{parse_str, FormatOptions, Term};
use error::{Error, InvalidArgument, UnknownCommand};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}, ops::Range};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// State shared by the lines of one session.
struct Session {
    /// The value of `x` at which terms are evaluated.
    x: f64,

    /// Whether to print the normalization steps.
    show_steps: bool,

    /// How numbers are displayed.
    format: FormatOptions,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            x: 0.0,
            show_steps: false,
            format: FormatOptions::default(),
        }
    }
}

/// Returns the span of `part` within `line`. `part` must be a subslice of `line`.
fn span_of(line: &str, part: &str) -> Range<usize> {
    let start = part.as_ptr() as usize - line.as_ptr() as usize;
    start..start + part.len()
}

impl Session {
    /// Runs a `:command` line. `line` is the whole line, used for error spans.
    fn command(&mut self, line: &str, command: &str) -> Result<(), Error> {
        let mut words = command.split_whitespace();
        let name = words.next();
        let argument = words.next();

        // points at the word if there is one, otherwise at the end of the line
        let word_span = |word: Option<&str>| word.map_or(line.len()..line.len(), |word| span_of(line, word));
        let argument_span = || word_span(argument);

        match name.unwrap_or_default() {
            "x" => {
                let invalid = || AlgError::new(
                    vec![argument_span()],
                    InvalidArgument { command: "x", expected: "a number" },
                );
                self.x = argument
                    .and_then(|arg| arg.parse::<f64>().ok())
                    .ok_or_else(invalid)?;
                info!(x = self.x, "set evaluation point");
                println!("x = {}", self.x);
            },
            "precision" => {
                let invalid = || AlgError::new(
                    vec![argument_span()],
                    InvalidArgument { command: "precision", expected: "a number of digits" },
                );
                let precision = argument
                    .and_then(|arg| arg.parse::<usize>().ok())
                    .ok_or_else(invalid)?;
                self.format = self.format.into_builder().precision(precision).build();
                println!("precision = {}", precision);
            },
            "steps" => {
                self.show_steps = !self.show_steps;
                println!("steps {}", if self.show_steps { "on" } else { "off" });
            },
            _ => {
                return Err(AlgError::new(
                    vec![word_span(name)],
                    UnknownCommand { name: name.unwrap_or_default().to_string() },
                ).into());
            },
        }

        Ok(())
    }

    /// Displays a term with the session's format.
    fn display(&self, term: &Term) -> String {
        term.tokenize().display_with(self.format).to_string()
    }

    /// Parses the expression and prints its normalized form, derivative and value.
    fn expression(&self, input: &str) -> Result<(), Error> {
        let term = parse_str(input)?;
        let mut steps = Vec::<Step>::new();
        let normalized = normalize_with_steps(&term, &mut steps);
        let derivative = term.derivative();

        if self.show_steps {
            for step in &steps {
                println!("  {:?}", step);
            }
        }
        println!("normalized: {}", self.display(&normalized));
        println!("derivative: {}", self.display(&derivative));
        println!("value at x = {}: {}", self.x, term.eval(self.x));
        Ok(())
    }

    /// Processes one line of input, reporting any error to stderr.
    fn process(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        let result = match trimmed.strip_prefix(':') {
            Some(command) => self.command(line, command),
            None => self.expression(line),
        };

        if let Err(err) = result {
            err.report_to_stderr(line);
        }
    }
}

/// Processes every line of the input in a fresh session.
fn execute(input: &str) {
    let mut session = Session::default();
    for line in input.lines() {
        session.process(line);
    }
}

/// Reads the whole of the given reader into a string.
fn read_all(mut reader: impl Read) -> io::Result<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(input)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run source file
        debug!(filename = %filename, "reading input file");
        match File::open(&filename).map(BufReader::new).and_then(read_all) {
            Ok(input) => execute(&input),
            Err(err) => {
                eprintln!("could not read `{}`: {}", filename, err);
                std::process::exit(1);
            },
        }
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        match read_all(io::stdin()) {
            Ok(input) => execute(&input),
            Err(err) => {
                eprintln!("could not read stdin: {}", err);
                std::process::exit(1);
            },
        }
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("could not start the editor: {}", err);
                std::process::exit(1);
            },
        };
        let mut session = Session::default();

        fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            session.process(&input);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut session) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
