use super::rules::prefix_handler;
use super::*;
use crate::ast::{Block, Identifier, NodeType};

impl<'a> Parser<'a> {
    /* Statements */
    /// Parses statements up to `terminator` (or the end of the input), which is not consumed.
    pub(crate) fn parse_statements(
        &mut self,
        locals: &mut Locals,
        terminator: TokenType,
    ) -> ParseResult<Block> {
        let mut nodes = Vec::new();
        self.skip_newlines();
        loop {
            let token_type = self.current_token().token_type;
            if token_type == terminator || token_type == TokenType::Eof {
                break;
            }
            nodes.push(self.parse_expression(Precedence::Lowest, locals)?);
            self.next_expression()?;
        }
        Ok(Block::new(nodes))
    }

    /// Parses a method body and the closing `end`.
    fn parse_body(&mut self, locals: &mut Locals) -> ParseResult<Block> {
        let body = self.parse_statements(locals, TokenType::End)?;
        self.expect(TokenType::End, "def end")?;
        Ok(body)
    }

    /* Statements.Def */
    /// Parses a method definition. The body gets its own scope: only parameters and variables
    /// assigned inside the method are local there.
    pub(crate) fn parse_def(&mut self, _locals: &mut Locals) -> ParseResult<Node> {
        let def = self.expect(TokenType::Def, "def")?;
        let name = self.expect(TokenType::Identifier, "method name")?;
        let name = Identifier::new(name, false);

        let mut scope = Locals::new();
        let params = match self.current_token().token_type {
            TokenType::LParen => self.parse_def_params(&mut scope)?,
            TokenType::Eol | TokenType::Eof | TokenType::End => Vec::new(),
            _ => {
                // def foo a, b
                let mut params = vec![self.parse_def_param(&mut scope)?];
                while self.eat(TokenType::Comma) {
                    params.push(self.parse_def_param(&mut scope)?);
                }
                params
            }
        };
        self.next_expression()?;

        let body = self.parse_body(&mut scope)?;
        Ok(Node::new(NodeKind::Def { name, params, body }, def.position()))
    }

    fn parse_def_params(&mut self, scope: &mut Locals) -> ParseResult<Vec<Node>> {
        let mut params = Vec::new();
        self.expect(TokenType::LParen, "def params")?;
        self.skip_newlines();
        if self.eat(TokenType::RParen) {
            return Ok(params);
        }
        loop {
            params.push(self.parse_def_param(scope)?);
            self.skip_newlines();
            if !self.eat(TokenType::Comma) {
                self.expect(TokenType::RParen, "def params closing paren")?;
                break;
            }
            self.skip_newlines();
        }
        Ok(params)
    }

    fn parse_def_param(&mut self, scope: &mut Locals) -> ParseResult<Node> {
        let token = self.current_token().clone();
        if token.token_type == TokenType::Identifier {
            let position = token.position();
            if !scope.declare(&token.literal) {
                let error = SyntaxError::new("duplicated argument name", position)
                    .with_token(&token.literal);
                return Err(error.into());
            }
            self.advance();
            return Ok(Node::new(
                NodeKind::Identifier(Identifier::new(token, true)),
                position,
            ));
        }

        let prefix = match prefix_handler(token.token_type) {
            Some(handler) => handler,
            None => return self.raise_unexpected("parameter name"),
        };
        let node = prefix(self, scope)?;
        Err(InternalError::UnexpectedNode {
            expected: NodeType::Identifier,
            found: node.node_type(),
            position: node.position,
        }
        .into())
    }
}
