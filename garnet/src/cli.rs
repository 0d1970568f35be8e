//! Command line options of the `garnet` binary.

use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: garnet [OPTIONS] [FILE]

Parses Ruby source code and prints it as s-expressions.
Reads FILE, the code given with -e, or lines typed into a prompt.

Options:
  -e CODE       parse CODE
  --ast         print the syntax tree instead of s-expressions
  --no-color    disable colored output
  -h, --help    print this message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Read and parse one line at a time.
    Repl,
    Eval(String),
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Sexp,
    Ast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: Input,
    pub format: Format,
    pub color: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input: Input::Repl,
            format: Format::Sexp,
            color: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("help requested")]
    Help,
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("`-e` needs an argument")]
    MissingCode,
    #[error("only one input can be given, found `{0}`")]
    ExtraInput(String),
}

impl Options {
    /// Parses the arguments following the program name.
    pub fn from_args<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            let input = match arg.as_str() {
                "-h" | "--help" => return Err(UsageError::Help),
                "--ast" => {
                    options.format = Format::Ast;
                    continue;
                }
                "--no-color" => {
                    options.color = false;
                    continue;
                }
                "-e" => Input::Eval(args.next().ok_or(UsageError::MissingCode)?),
                _ if arg.starts_with('-') => return Err(UsageError::UnknownOption(arg)),
                _ => Input::File(PathBuf::from(&arg)),
            };
            if options.input != Input::Repl {
                let found = match input {
                    Input::Eval(code) => code,
                    _ => arg,
                };
                return Err(UsageError::ExtraInput(found));
            }
            options.input = input;
        }

        Ok(options)
    }
}
