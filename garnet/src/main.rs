use console::style;
use garnet::cli::{Format, Input, Options, UsageError, USAGE};
use garnet::Session;
use garnet_parser::ParseError;
use garnet_value::pretty::Pretty;
use std::io::{self, BufRead, Write};
use std::{env, fs, process};

fn main() {
    let options = match Options::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(UsageError::Help) => {
            println!("{}", USAGE);
            return;
        }
        Err(err) => {
            eprintln!("{} {}\n\n{}", style("error:").red().bold(), err, USAGE);
            process::exit(2);
        }
    };
    if !options.color {
        console::set_colors_enabled(false);
    }

    let result = match &options.input {
        Input::Repl => repl(options.format),
        Input::Eval(code) => Ok(parse_and_print(&mut Session::new(), code, options.format)),
        Input::File(path) => fs::read_to_string(path)
            .map(|code| parse_and_print(&mut Session::new(), &code, options.format)),
    };
    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("{} {}", style("error:").red().bold(), err);
            process::exit(1);
        }
    }
}

/// Reads lines until end of input. Variables assigned on one line are locals on the next.
fn repl(format: Format) -> io::Result<bool> {
    let mut session = Session::new();
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        stdout.flush()?;

        let input = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if input.trim().is_empty() {
            continue;
        }
        parse_and_print(&mut session, &input, format);
    }
    println!();
    Ok(true)
}

/// Returns `false` if `code` does not parse.
fn parse_and_print(session: &mut Session, code: &str, format: Format) -> bool {
    match print(session, code, format) {
        Ok(()) => true,
        Err(ParseError::Syntax(err)) => {
            eprintln!("{} {}", style("syntax error:").red().bold(), err);
            false
        }
        Err(err) => {
            eprintln!("{} {}", style("bug:").red().bold(), err);
            false
        }
    }
}

fn print(session: &mut Session, code: &str, format: Format) -> Result<(), ParseError> {
    let ast = session.parse(code)?;
    match format {
        Format::Ast => println!("{:#?}", ast),
        Format::Sexp => {
            let sexp = session.to_sexp(&ast)?;
            println!("{}", Pretty::new(&sexp));
        }
    }
    Ok(())
}
