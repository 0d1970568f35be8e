//! Parser for a small subset of Ruby.
//!
//! [`parse_source`] turns source code into an AST whose root is a block of statements.
//! [`ast::Node::to_sexp`] renders it as a `ruby_parser` style tagged list.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod locals;
pub mod parser;
pub mod precedence;
pub mod serialize;

pub use error::{InternalError, ParseError, ParseResult};
pub use locals::Locals;

use garnet_source::Source;
use garnet_value::Env;

/// Lexes and parses `source` with an empty top level scope.
/// Returns the first lexical error if there is any.
pub fn parse_source(source: &Source, env: &mut Env) -> ParseResult<ast::Node> {
    let tokens = lexer::lex(source);
    if let Some(error) = source.errors.first() {
        return Err(error.into());
    }
    parser::Parser::new(tokens, env).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_ast_is_thread_safe() {
        assert_send_sync::<ast::Node>();
        assert_send_sync::<ParseError>();
    }

    #[test]
    fn test_lex_error_stops_parsing() {
        let mut env = Env::new();
        let source = Source::new("1 + $");
        let error = parse_source(&source, &mut env).unwrap_err();
        assert!(error.is_syntax());
        assert_eq!(error.to_string(), "Unexpected character `$` at line 1, column 5");
    }

    #[test]
    fn test_symbols_are_interned_in_env() {
        let mut env = Env::new();
        let source = Source::new("foo(:a)\n:a");
        let node = parse_source(&source, &mut env).unwrap();
        let count = env.symbol_count();
        node.to_sexp(&mut env).unwrap();
        assert!(env.symbol_count() > count); // tags are interned on serialization
        assert!(env.symbol_count() < 10);
    }
}
