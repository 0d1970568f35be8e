//! Conversion of the AST into tagged lists.
//!
//! The output follows `ruby_parser` conventions, e.g. `puts 1` becomes `s(:call, nil, :puts, s(:lit, 1))`.

use crate::ast::{Block, Identifier, Node, NodeKind, NodeType};
use crate::error::InternalError;
use garnet_value::{Env, Sexp, Value};

impl Node {
    /// Serializes the node and all its children.
    /// Symbols are interned through `env`.
    pub fn to_sexp(&self, env: &mut Env) -> Result<Value, InternalError> {
        let sexp = match &self.kind {
            NodeKind::Assignment { target, value } => Sexp::new(env.intern("lasgn"))
                .with(env.intern(target.name()))
                .with(value.to_sexp(env)?),
            NodeKind::Block(block) => block.to_sexp(env)?,
            NodeKind::Call {
                receiver,
                message,
                args,
            } => {
                let mut sexp = Sexp::new(env.intern("call"))
                    .with(receiver.to_sexp(env)?)
                    .with(message.clone());
                for arg in args {
                    sexp.push(arg.to_sexp(env)?);
                }
                sexp
            }
            NodeKind::Def { name, params, body } => {
                let mut sexp = Sexp::new(env.intern("defn"))
                    .with(env.intern(name.name()))
                    .with(build_args_sexp(params, env)?);
                if body.is_empty() {
                    sexp.push(Sexp::new(env.intern("nil")));
                } else {
                    for node in &body.nodes {
                        sexp.push(node.to_sexp(env)?);
                    }
                }
                sexp
            }
            NodeKind::False => Sexp::new(env.intern("false")),
            NodeKind::Identifier(identifier) => identifier.to_sexp(env),
            NodeKind::If {
                condition,
                if_true,
                if_false,
            } => Sexp::new(env.intern("if"))
                .with(condition.to_sexp(env)?)
                .with(if_true.to_sexp(env)?)
                .with(if_false.to_sexp(env)?),
            // implicit self is the bare `nil` in receiver position
            NodeKind::ImplicitSelf => return Ok(Value::Nil),
            NodeKind::Literal(value) => Sexp::new(env.intern("lit")).with(value.clone()),
            NodeKind::Nil => Sexp::new(env.intern("nil")),
            NodeKind::String(value) => Sexp::new(env.intern("str")).with(value.clone()),
            NodeKind::Symbol(value) => Sexp::new(env.intern("sym")).with(value.clone()),
            NodeKind::True => Sexp::new(env.intern("true")),
        };
        Ok(Value::Sexp(sexp))
    }
}

impl Block {
    pub fn to_sexp(&self, env: &mut Env) -> Result<Sexp, InternalError> {
        let mut sexp = Sexp::new(env.intern("block"));
        for node in &self.nodes {
            sexp.push(node.to_sexp(env)?);
        }
        Ok(sexp)
    }
}

impl Identifier {
    pub fn to_sexp(&self, env: &mut Env) -> Sexp {
        if self.is_local_variable() {
            Sexp::new(env.intern("lvar")).with(env.intern(self.name()))
        } else {
            Sexp::new(env.intern("call"))
                .with(Value::Nil)
                .with(env.intern(self.name()))
        }
    }
}

fn build_args_sexp(params: &[Node], env: &mut Env) -> Result<Sexp, InternalError> {
    let mut sexp = Sexp::new(env.intern("args"));
    for param in params {
        match &param.kind {
            NodeKind::Identifier(identifier) => sexp.push(env.intern(identifier.name())),
            _ => {
                return Err(InternalError::UnexpectedNode {
                    expected: NodeType::Identifier,
                    found: param.node_type(),
                    position: param.position,
                })
            }
        }
    }
    Ok(sexp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Token, TokenType};
    use garnet_source::Position;

    fn at(kind: NodeKind) -> Node {
        Node::new(kind, Position::new(1, 1))
    }

    fn identifier(name: &str, is_local_variable: bool) -> Identifier {
        Identifier::new(
            Token::new(TokenType::Identifier, name, Position::new(1, 1)),
            is_local_variable,
        )
    }

    fn sexp_of(node: &Node, env: &mut Env) -> Sexp {
        match node.to_sexp(env).unwrap() {
            Value::Sexp(sexp) => sexp,
            other => panic!("expected a sexp, got {}", other),
        }
    }

    #[test]
    fn test_leaves() {
        let mut env = Env::new();
        let sym = Value::Symbol(env.intern("ok"));
        let cases = vec![
            (at(NodeKind::True), "s(:true)"),
            (at(NodeKind::False), "s(:false)"),
            (at(NodeKind::Nil), "s(:nil)"),
            (at(NodeKind::Literal(Value::Integer(7))), "s(:lit, 7)"),
            (at(NodeKind::Literal(Value::Float(0.5))), "s(:lit, 0.5)"),
            (at(NodeKind::Symbol(sym)), "s(:sym, :ok)"),
            (
                at(NodeKind::String(Value::String("hi".to_string()))),
                r#"s(:str, "hi")"#,
            ),
        ];
        for (node, expected) in cases {
            assert_eq!(node.to_sexp(&mut env).unwrap().to_string(), expected);
        }
    }

    #[test]
    fn test_head_tag_identifies_variant() {
        let mut env = Env::new();
        let message = env.intern("foo");
        let nodes = vec![
            at(NodeKind::Assignment {
                target: identifier("x", false),
                value: Box::new(at(NodeKind::Nil)),
            }),
            at(NodeKind::Block(Block::default())),
            Node::call(at(NodeKind::ImplicitSelf), message, Vec::new(), Position::new(1, 1)),
            at(NodeKind::Def {
                name: identifier("m", false),
                params: Vec::new(),
                body: Block::default(),
            }),
            at(NodeKind::False),
            at(NodeKind::Identifier(identifier("x", true))),
            at(NodeKind::If {
                condition: Box::new(at(NodeKind::True)),
                if_true: Box::new(at(NodeKind::Nil)),
                if_false: Box::new(at(NodeKind::Nil)),
            }),
            at(NodeKind::Literal(Value::Integer(1))),
            at(NodeKind::Nil),
            at(NodeKind::String(Value::String(String::new()))),
            at(NodeKind::Symbol(Value::Symbol(env.intern("s")))),
            at(NodeKind::True),
        ];
        let mut tags: Vec<String> = nodes
            .iter()
            .map(|node| sexp_of(node, &mut env).tag().name().to_string())
            .collect();
        let count = tags.len();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), count, "duplicate tags: {:?}", tags);
    }

    #[test]
    fn test_children_are_recoverable() {
        let mut env = Env::new();
        let message = env.intern("+");
        let node = Node::call(
            at(NodeKind::Identifier(identifier("a", true))),
            message.clone(),
            vec![at(NodeKind::Literal(Value::Integer(2)))],
            Position::new(1, 1),
        );

        let sexp = sexp_of(&node, &mut env);
        assert_eq!(sexp.tag().name(), "call");
        let receiver = sexp.child(0).and_then(Value::cast_to_sexp).unwrap();
        assert_eq!(receiver.tag().name(), "lvar");
        assert_eq!(receiver.child(0), Some(&Value::Symbol(env.intern("a"))));
        assert_eq!(sexp.child(1), Some(&Value::Symbol(message)));
        let arg = sexp.child(2).and_then(Value::cast_to_sexp).unwrap();
        assert_eq!(arg.child(0).and_then(Value::cast_to_integer), Some(2));
    }

    #[test]
    fn test_identifier_outside_locals_is_a_call() {
        let mut env = Env::new();
        let node = at(NodeKind::Identifier(identifier("foo", false)));
        assert_eq!(node.to_sexp(&mut env).unwrap().to_string(), "s(:call, nil, :foo)");
    }

    #[test]
    fn test_def() {
        let mut env = Env::new();
        let node = at(NodeKind::Def {
            name: identifier("id", false),
            params: vec![at(NodeKind::Identifier(identifier("x", true)))],
            body: Block::new(vec![at(NodeKind::Identifier(identifier("x", true)))]),
        });
        assert_eq!(
            node.to_sexp(&mut env).unwrap().to_string(),
            "s(:defn, :id, s(:args, :x), s(:lvar, :x))"
        );
    }

    #[test]
    fn test_def_with_empty_body() {
        let mut env = Env::new();
        let node = at(NodeKind::Def {
            name: identifier("noop", false),
            params: Vec::new(),
            body: Block::default(),
        });
        assert_eq!(
            node.to_sexp(&mut env).unwrap().to_string(),
            "s(:defn, :noop, s(:args), s(:nil))"
        );
    }

    #[test]
    fn test_def_with_non_identifier_param_is_internal_error() {
        let mut env = Env::new();
        let node = at(NodeKind::Def {
            name: identifier("bad", false),
            params: vec![Node::new(
                NodeKind::Literal(Value::Integer(1)),
                Position::new(1, 9),
            )],
            body: Block::default(),
        });
        assert_eq!(
            node.to_sexp(&mut env),
            Err(InternalError::UnexpectedNode {
                expected: NodeType::Identifier,
                found: NodeType::Literal,
                position: Position::new(1, 9),
            })
        );
    }

    #[test]
    fn test_empty_block() {
        let mut env = Env::new();
        let sexp = Block::default().to_sexp(&mut env).unwrap();
        assert!(sexp.is_empty());
        assert_eq!(sexp.to_string(), "s(:block)");
    }
}
