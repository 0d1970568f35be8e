use super::rules::{begins_bare_argument, infix_handler, prefix_handler};
use super::*;
use crate::ast::{Identifier, NodeType};
use garnet_value::Value;
use tracing::trace;

impl<'a> Parser<'a> {
    /* Expressions */
    /// Parses an expression, folding in every continuation that binds tighter than `precedence`.
    /// Use [`Precedence::Lowest`] to accept any expression.
    pub fn parse_expression(
        &mut self,
        precedence: Precedence,
        locals: &mut Locals,
    ) -> ParseResult<Node> {
        if self.depth >= MAX_NESTING_DEPTH {
            let token = self.current_token();
            let error = SyntaxError::new("expression nested too deeply", token.position())
                .with_token(&token.literal);
            return Err(error.into());
        }
        self.depth += 1;
        let result = self.parse_nested_expression(precedence, locals);
        self.depth -= 1;
        result
    }

    fn parse_nested_expression(
        &mut self,
        precedence: Precedence,
        locals: &mut Locals,
    ) -> ParseResult<Node> {
        self.skip_newlines();
        let token_type = self.current_token().token_type;
        let prefix = match prefix_handler(token_type) {
            Some(handler) => handler,
            None => return self.raise_unexpected("expression"),
        };
        trace!(token = %token_type, "prefix");
        let left = prefix(self, locals)?;
        self.parse_infix_continuation(left, precedence, locals)
    }

    /// The precedence climbing loop.
    fn parse_infix_continuation(
        &mut self,
        mut left: Node,
        precedence: Precedence,
        locals: &mut Locals,
    ) -> ParseResult<Node> {
        while self.current_token().precedence() > precedence {
            let token_type = self.current_token().token_type;
            let infix = match infix_handler(token_type) {
                Some(handler) => handler,
                None => break, // cannot continue, expression is complete
            };
            trace!(token = %token_type, ?precedence, "infix");
            left = infix(self, left, locals)?;
        }
        Ok(left)
    }

    /* Expressions.Literals */
    pub(crate) fn parse_bool(&mut self, _locals: &mut Locals) -> ParseResult<Node> {
        let token = self.next_token();
        let kind = match token.token_type {
            TokenType::True => NodeKind::True,
            TokenType::False => NodeKind::False,
            _ => return self.misrouted("bool", &token),
        };
        Ok(Node::new(kind, token.position()))
    }

    pub(crate) fn parse_nil(&mut self, _locals: &mut Locals) -> ParseResult<Node> {
        let token = self.next_token();
        if token.token_type != TokenType::Nil {
            return self.misrouted("nil", &token);
        }
        Ok(Node::new(NodeKind::Nil, token.position()))
    }

    /// Parses a numeric literal. A sign in front of the digits belongs to the literal.
    pub(crate) fn parse_lit(&mut self, _locals: &mut Locals) -> ParseResult<Node> {
        let token = self.current_token().clone();
        let value = self.numeric_value(&token, &token.literal)?;
        self.advance();
        Ok(Node::new(NodeKind::Literal(value), token.position()))
    }

    pub(crate) fn parse_symbol(&mut self, _locals: &mut Locals) -> ParseResult<Node> {
        let token = self.next_token();
        if token.token_type != TokenType::Symbol {
            return self.misrouted("symbol", &token);
        }
        let symbol = self.env.intern(&token.literal);
        Ok(Node::new(
            NodeKind::Symbol(Value::Symbol(symbol)),
            token.position(),
        ))
    }

    pub(crate) fn parse_string(&mut self, _locals: &mut Locals) -> ParseResult<Node> {
        let token = self.next_token();
        if token.token_type != TokenType::String {
            return self.misrouted("string", &token);
        }
        let position = token.position();
        Ok(Node::new(
            NodeKind::String(Value::String(token.literal)),
            position,
        ))
    }

    /// Converts the digits in `text` (which belongs to `token`) into an integer or float value.
    fn numeric_value(&self, token: &Token, text: &str) -> ParseResult<Value> {
        let value = match token.token_type {
            TokenType::Integer => text.parse().map(Value::Integer).ok(),
            TokenType::Float => text.parse().map(Value::Float).ok(),
            _ => return self.misrouted("numeric literal", token),
        };
        match value {
            Some(value) => Ok(value),
            None => Err(SyntaxError::new(
                format!("numeric literal {} is out of range", token.describe()),
                token.position(),
            )
            .with_token(&token.literal)
            .into()),
        }
    }

    /* Expressions.Grouping */
    pub(crate) fn parse_group(&mut self, locals: &mut Locals) -> ParseResult<Node> {
        let open = self.expect(TokenType::LParen, "group")?;
        self.skip_newlines();
        if self.eat(TokenType::RParen) {
            return Ok(Node::new(NodeKind::Nil, open.position())); // `()`
        }
        let node = self.parse_expression(Precedence::Lowest, locals)?;
        self.skip_newlines();
        self.expect(TokenType::RParen, "group closing paren")?;
        Ok(node)
    }

    /* Expressions.Identifier */
    /// Parses an identifier or a call without receiver.
    /// Known local variables become [`NodeKind::Identifier`]s; anything else is sent to `self`,
    /// except an assignment target.
    pub(crate) fn parse_identifier(&mut self, locals: &mut Locals) -> ParseResult<Node> {
        let token = self.current_token().clone();
        if token.token_type != TokenType::Identifier {
            return self.misrouted("identifier", &token);
        }
        let is_assignment_target = self.peek_token().token_type == TokenType::Equal;
        self.advance();

        let position = token.position();
        let is_local_variable = locals.contains(&token.literal);
        let identifier = Node::new(
            NodeKind::Identifier(Identifier::new(token, is_local_variable)),
            position,
        );
        if is_local_variable || is_assignment_target {
            Ok(identifier)
        } else {
            self.parse_call_expression_without_parens(identifier, locals)
        }
    }

    /* Expressions.Continuations */
    /// Turns an identifier into a send to `self`, taking any arguments written without parentheses.
    pub(crate) fn parse_call_expression_without_parens(
        &mut self,
        left: Node,
        locals: &mut Locals,
    ) -> ParseResult<Node> {
        let position = left.position;
        let message = match &left.kind {
            NodeKind::Identifier(identifier) => self.env.intern(identifier.name()),
            _ => {
                return Err(InternalError::UnexpectedNode {
                    expected: NodeType::Identifier,
                    found: left.node_type(),
                    position,
                }
                .into())
            }
        };
        let args = if begins_bare_argument(self.current_token()) {
            self.parse_bare_args(locals)?
        } else {
            Vec::new()
        };
        let receiver = Node::new(NodeKind::ImplicitSelf, position);
        Ok(Node::call(receiver, message, args, position))
    }

    /// Parses `arg, arg, ...` up to the end of the argument list.
    fn parse_bare_args(&mut self, locals: &mut Locals) -> ParseResult<Vec<Node>> {
        let mut args = vec![self.parse_expression(Precedence::Lowest, locals)?];
        while self.eat(TokenType::Comma) {
            args.push(self.parse_expression(Precedence::Lowest, locals)?);
        }
        Ok(args)
    }

    pub(crate) fn parse_assignment_expression(
        &mut self,
        left: Node,
        locals: &mut Locals,
    ) -> ParseResult<Node> {
        let target = match left.kind {
            NodeKind::Identifier(identifier) => identifier,
            _ => return self.raise_unexpected("a local variable on the left side of `=`"),
        };
        let equal = self.expect(TokenType::Equal, "assignment")?;

        // visible from the value on, as in `x = x`
        locals.declare(target.name());
        // lowest, so `x = y = 1` nests to the right and `x = a ? b : c` assigns the conditional
        let value = self.parse_expression(Precedence::Lowest, locals)?;
        Ok(Node::new(
            NodeKind::Assignment {
                target,
                value: Box::new(value),
            },
            equal.position(),
        ))
    }

    pub(crate) fn parse_call_expression_with_parens(
        &mut self,
        left: Node,
        locals: &mut Locals,
    ) -> ParseResult<Node> {
        // `foo()(1)` and `(a.b)(1)` already have their argument list
        if self.previous_token().map(|token| token.token_type) == Some(TokenType::RParen) {
            return self.raise_unexpected("end-of-line");
        }
        let position = left.position;
        let (receiver, message, mut args) = match left.kind {
            NodeKind::Identifier(identifier) => {
                let message = self.env.intern(identifier.name());
                (Node::new(NodeKind::ImplicitSelf, position), message, Vec::new())
            }
            NodeKind::Call {
                receiver,
                message,
                args,
            } if args.is_empty() => (*receiver, message, args),
            _ => return self.raise_unexpected("end-of-line"),
        };
        self.expect(TokenType::LParen, "call")?;

        self.skip_newlines();
        if !self.eat(TokenType::RParen) {
            loop {
                args.push(self.parse_expression(Precedence::Lowest, locals)?);
                self.skip_newlines();
                if !self.eat(TokenType::Comma) {
                    self.expect(TokenType::RParen, "call closing paren")?;
                    break;
                }
            }
        }

        Ok(Node::call(receiver, message, args, position))
    }

    /// Parses a binary operator as a send to the left operand.
    pub(crate) fn parse_infix_expression(
        &mut self,
        left: Node,
        locals: &mut Locals,
    ) -> ParseResult<Node> {
        let operator = self.next_token();
        let message = match operator.token_type.operator_name() {
            Some(name) => self.env.intern(name),
            None => return self.misrouted("infix operator", &operator),
        };
        // same precedence on the right makes every binary operator left associative
        let right = self.parse_expression(operator.precedence(), locals)?;
        Ok(Node::call(left, message, vec![right], operator.position()))
    }

    /// `a -1` lexes as `a` followed by the literal `-1`. Parses it as `a - 1`.
    pub(crate) fn parse_signed_literal_expression(
        &mut self,
        left: Node,
        locals: &mut Locals,
    ) -> ParseResult<Node> {
        let token = self.next_token();
        if !token.has_sign {
            return self.misrouted("signed literal", &token);
        }
        let (sign, digits) = token.literal.split_at(1);
        let value = self.numeric_value(&token, digits)?;
        let message = self.env.intern(sign);

        let literal = Node::new(NodeKind::Literal(value), token.position());
        let right = self.parse_infix_continuation(literal, Precedence::Sum, locals)?;
        Ok(Node::call(left, message, vec![right], token.position()))
    }

    /// Parses `receiver.message`, with arguments in parentheses left to the call continuation.
    pub(crate) fn parse_send_expression(
        &mut self,
        left: Node,
        locals: &mut Locals,
    ) -> ParseResult<Node> {
        let dot = self.expect(TokenType::Dot, "send")?;
        let name = self.expect(TokenType::Identifier, "send method name")?;
        let message = self.env.intern(&name.literal);
        let args = if begins_bare_argument(self.current_token()) {
            self.parse_bare_args(locals)?
        } else {
            Vec::new()
        };
        Ok(Node::call(left, message, args, dot.position()))
    }

    pub(crate) fn parse_ternary_expression(
        &mut self,
        left: Node,
        locals: &mut Locals,
    ) -> ParseResult<Node> {
        let question = self.expect(TokenType::TernaryQuestion, "ternary ?")?;
        // the `:` has no infix handler, so it always ends the true branch
        let if_true = self.parse_expression(Precedence::Lowest, locals)?;
        self.skip_newlines();
        self.expect(TokenType::TernaryColon, "ternary :")?;
        let if_false = self.parse_expression(Precedence::Lowest, locals)?;
        Ok(Node::new(
            NodeKind::If {
                condition: Box::new(left),
                if_true: Box::new(if_true),
                if_false: Box::new(if_false),
            },
            question.position(),
        ))
    }
}
