pub mod cli;

use garnet_parser::ast::Node;
use garnet_parser::lexer::lex;
use garnet_parser::parser::Parser;
use garnet_parser::{Locals, ParseResult};
use garnet_source::Source;
use garnet_value::{Env, Value};
use tracing::debug;

/// Parses a whole program and serializes it.
pub fn parse(source: &str) -> ParseResult<Value> {
    Session::new().parse_to_sexp(source)
}

/// Parses successive inputs that share symbols and top level local variables, as in a REPL.
#[derive(Debug, Default)]
pub struct Session {
    env: Env,
    locals: Locals,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The variables assigned by every successful input so far.
    pub fn locals(&self) -> &Locals {
        &self.locals
    }

    /// Parses `input` in the current scope.
    /// Variables it assigns are kept only if the whole input parses.
    pub fn parse(&mut self, input: &str) -> ParseResult<Node> {
        let source = Source::new(input);
        let tokens = lex(&source);
        if let Some(error) = source.errors.first() {
            return Err(error.into());
        }

        let mut parser = Parser::with_locals(tokens, &mut self.env, self.locals.clone());
        let node = parser.parse_program()?;
        self.locals = parser.into_locals();
        debug!(locals = self.locals.len(), "session input parsed");
        Ok(node)
    }

    pub fn to_sexp(&mut self, node: &Node) -> ParseResult<Value> {
        Ok(node.to_sexp(&mut self.env)?)
    }

    pub fn parse_to_sexp(&mut self, input: &str) -> ParseResult<Value> {
        let node = self.parse(input)?;
        self.to_sexp(&node)
    }
}
