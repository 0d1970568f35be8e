use crate::lexer::Token;
use garnet_source::Position;
use garnet_value::{Symbol, Value};

/// Discriminant of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Assignment,
    Block,
    Call,
    Def,
    False,
    Identifier,
    If,
    ImplicitSelf,
    Literal,
    Nil,
    String,
    Symbol,
    True,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A local variable assignment (e.g. `x = 1`).
    Assignment {
        target: Identifier,
        value: Box<Node>,
    },
    Block(Block),
    /// A message send (e.g. `foo.bar(1)`, `puts 1`, `1 + 2`).
    Call {
        receiver: Box<Node>,
        message: Symbol,
        args: Vec<Node>,
    },
    /// A method definition. Every parameter is an [`NodeKind::Identifier`].
    Def {
        name: Identifier,
        params: Vec<Node>,
        body: Block,
    },
    False,
    Identifier(Identifier),
    If {
        condition: Box<Node>,
        if_true: Box<Node>,
        if_false: Box<Node>,
    },
    /// The receiver of a call written without one.
    ImplicitSelf,
    /// A numeric literal.
    Literal(Value),
    Nil,
    String(Value),
    Symbol(Value),
    True,
}

/// A sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub nodes: Vec<Node>,
}

impl Block {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// An identifier (e.g. `foo`).
/// Whether it names a local variable is decided once, when the parser reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    token: Token,
    is_local_variable: bool,
}

impl Identifier {
    pub fn new(token: Token, is_local_variable: bool) -> Self {
        Self {
            token,
            is_local_variable,
        }
    }

    pub fn name(&self) -> &str {
        &self.token.literal
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn is_local_variable(&self) -> bool {
        self.is_local_variable
    }
}

impl Node {
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn call(receiver: Node, message: Symbol, args: Vec<Node>, position: Position) -> Self {
        Self::new(
            NodeKind::Call {
                receiver: Box::new(receiver),
                message,
                args,
            },
            position,
        )
    }

    pub fn node_type(&self) -> NodeType {
        match &self.kind {
            NodeKind::Assignment { .. } => NodeType::Assignment,
            NodeKind::Block(_) => NodeType::Block,
            NodeKind::Call { .. } => NodeType::Call,
            NodeKind::Def { .. } => NodeType::Def,
            NodeKind::False => NodeType::False,
            NodeKind::Identifier(_) => NodeType::Identifier,
            NodeKind::If { .. } => NodeType::If,
            NodeKind::ImplicitSelf => NodeType::ImplicitSelf,
            NodeKind::Literal(_) => NodeType::Literal,
            NodeKind::Nil => NodeType::Nil,
            NodeKind::String(_) => NodeType::String,
            NodeKind::Symbol(_) => NodeType::Symbol,
            NodeKind::True => NodeType::True,
        }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}
