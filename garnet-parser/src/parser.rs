use crate::ast::{Node, NodeKind};
use crate::error::{InternalError, ParseResult};
use crate::lexer::{Token, TokenType};
use crate::locals::Locals;
use garnet_source::{Position, SyntaxError};
use garnet_value::Env;
use std::mem;
use tracing::debug;

mod expr;
mod rules;
mod stmt;

pub use crate::precedence::Precedence;

/// Deepest expression nesting accepted before parsing fails with a syntax error.
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser<'a> {
    /// Every token of the input, ending with [`TokenType::Eof`].
    tokens: Vec<Token>,
    /// Index of the current token.
    index: usize,
    /// Interns the symbols stored in the AST.
    env: &'a mut Env,
    /// Top level scope.
    locals: Locals,
    /// Number of `parse_expression` calls in progress.
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, env: &'a mut Env) -> Self {
        Self::with_locals(tokens, env, Locals::new())
    }

    /// Create a parser whose top level scope already knows `locals`.
    pub fn with_locals(mut tokens: Vec<Token>, env: &'a mut Env, locals: Locals) -> Self {
        if !tokens.last().map_or(false, Token::is_eof) {
            let position = tokens
                .last()
                .map_or(Position::new(1, 1), Token::position);
            tokens.push(Token::new(TokenType::Eof, "", position));
        }
        Self {
            tokens,
            index: 0,
            env,
            locals,
            depth: 0,
        }
    }

    /// The top level scope, including the variables assigned by the last [`Self::parse_program`].
    pub fn locals(&self) -> &Locals {
        &self.locals
    }

    pub fn into_locals(self) -> Locals {
        self.locals
    }
}

impl<'a> Parser<'a> {
    /// Parses the whole input into a [`NodeKind::Block`] of statements.
    pub fn parse_program(&mut self) -> ParseResult<Node> {
        let mut locals = mem::take(&mut self.locals);
        let result = self.parse_top_level(&mut locals);
        self.locals = locals;
        result
    }

    fn parse_top_level(&mut self, locals: &mut Locals) -> ParseResult<Node> {
        let position = self.current_token().position();
        let block = self.parse_statements(locals, TokenType::Eof)?;
        debug!(statements = block.len(), "parsed program");
        Ok(Node::new(NodeKind::Block(block), position))
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    fn current_token(&self) -> &Token {
        // `with_locals` guarantees a trailing Eof, so the index is clamped onto it
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    fn previous_token(&self) -> Option<&Token> {
        self.index.checked_sub(1).map(|index| &self.tokens[index])
    }

    fn peek_token(&self) -> &Token {
        &self.tokens[(self.index + 1).min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.index < self.tokens.len() - 1 {
            self.index += 1;
        }
    }

    /// Returns the current token and moves past it.
    fn next_token(&mut self) -> Token {
        let token = self.current_token().clone();
        self.advance();
        token
    }

    /// Predicate that tests whether the current token has type `token_type` and eats it if yes as a side effect.
    fn eat(&mut self, token_type: TokenType) -> bool {
        if self.current_token().token_type == token_type {
            self.advance(); // eat token
            true
        } else {
            false
        }
    }

    /// Eats and returns the current token if it has type `token_type`, otherwise raises a syntax error.
    /// `context` names the construct being parsed.
    fn expect(&mut self, token_type: TokenType, context: &str) -> ParseResult<Token> {
        let token = self.current_token();
        if token.token_type != token_type {
            let error = SyntaxError::new(
                format!(
                    "unexpected {}; expected {} ({})",
                    token.describe(),
                    token_type,
                    context
                ),
                token.position(),
            )
            .with_token(&token.literal);
            return Err(error.into());
        }
        Ok(self.next_token())
    }

    /// Raises an unexpected token error for the current token.
    fn raise_unexpected<T>(&self, expected: &str) -> ParseResult<T> {
        let token = self.current_token();
        let error = SyntaxError::new(
            format!("unexpected {}; expected {}", token.describe(), expected),
            token.position(),
        )
        .with_token(&token.literal);
        Err(error.into())
    }

    /// Raised when a handler is invoked for a token it was never registered for.
    fn misrouted<T>(&self, handler: &'static str, token: &Token) -> ParseResult<T> {
        Err(InternalError::MisroutedToken {
            handler,
            token_type: token.token_type,
            position: token.position(),
        }
        .into())
    }

    fn skip_newlines(&mut self) {
        while self.eat(TokenType::Eol) {}
    }

    /// Moves past the terminator that follows a statement.
    fn next_expression(&mut self) -> ParseResult<()> {
        match self.current_token().token_type {
            TokenType::Eol => {
                self.skip_newlines();
                Ok(())
            }
            TokenType::Eof | TokenType::End => Ok(()),
            _ => self.raise_unexpected("end-of-line"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::lexer::lex;
    use garnet_source::Source;

    fn parse(source: &str) -> ParseResult<Node> {
        let mut env = Env::new();
        let source = Source::new(source);
        let tokens = lex(&source);
        assert!(source.has_no_errors());
        Parser::new(tokens, &mut env).parse_program()
    }

    fn syntax_error(source: &str) -> SyntaxError {
        match parse(source) {
            Err(ParseError::Syntax(error)) => error,
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_program() {
        let node = parse("").unwrap();
        assert_eq!(node.kind, NodeKind::Block(Default::default()));
        let node = parse("\n\n;\n").unwrap();
        assert_eq!(node.kind, NodeKind::Block(Default::default()));
    }

    #[test]
    fn test_statements() {
        match parse("1\n\n2; 3\n").unwrap().kind {
            NodeKind::Block(block) => assert_eq!(block.len(), 3),
            other => panic!("expected a block, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_eof_is_added() {
        let mut env = Env::new();
        let tokens = vec![Token::new(TokenType::Integer, "1", Position::new(1, 1))];
        let node = Parser::new(tokens, &mut env).parse_program().unwrap();
        assert_eq!(node.node_type(), crate::ast::NodeType::Block);
    }

    #[test]
    fn test_no_prefix_handler() {
        let error = syntax_error("+");
        assert_eq!(error.message(), "unexpected `+`; expected expression");
        assert_eq!(error.position(), Position::new(1, 1));
        assert_eq!(error.token(), Some("+"));
    }

    #[test]
    fn test_statement_must_end() {
        let error = syntax_error("1 2");
        assert_eq!(error.message(), "unexpected `2`; expected end-of-line");
        assert_eq!(error.position(), Position::new(1, 3));
    }

    #[test]
    fn test_stray_end() {
        let error = syntax_error("1\nend");
        assert_eq!(error.message(), "unexpected `end`; expected expression");
        assert_eq!(error.position(), Position::new(2, 1));
    }

    #[test]
    fn test_unterminated_group() {
        let error = syntax_error("(1 + 2");
        assert_eq!(
            error.message(),
            "unexpected end-of-input; expected `)` (group closing paren)"
        );
        assert_eq!(error.position(), Position::new(1, 7));
    }

    #[test]
    fn test_seeded_locals() {
        let mut env = Env::new();
        let source = Source::new("x");
        let locals: Locals = vec!["x"].into_iter().collect();
        let mut parser = Parser::with_locals(lex(&source), &mut env, locals);
        let node = parser.parse_program().unwrap();
        let sexp = node.to_sexp(&mut env).unwrap();
        assert_eq!(sexp.to_string(), "s(:block, s(:lvar, :x))");
    }

    #[test]
    fn test_assignments_extend_top_level_scope() {
        let mut env = Env::new();
        let source = Source::new("a = 1\nb = a");
        let mut parser = Parser::new(lex(&source), &mut env);
        parser.parse_program().unwrap();
        assert_eq!(parser.locals().iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
