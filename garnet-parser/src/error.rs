//! Parse failures.

use crate::ast::NodeType;
use crate::lexer::TokenType;
use garnet_source::{Position, SyntaxError};
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Either the input is malformed or the parser is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Malformed input. Reportable to the end user.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A parser defect or a violated AST invariant.
    #[error("internal parser error: {0}")]
    Internal(#[from] InternalError),
}

impl ParseError {
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax(_))
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, ParseError::Internal(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalError {
    /// A node showed up where only another kind is allowed (e.g. a non-identifier `def` parameter).
    #[error("expected {expected:?} node, found {found:?} node at {position}")]
    UnexpectedNode {
        expected: NodeType,
        found: NodeType,
        position: Position,
    },
    /// A handler was dispatched for a token it does not handle.
    #[error("{handler} handler cannot parse {token_type} at {position}")]
    MisroutedToken {
        handler: &'static str,
        token_type: TokenType,
        position: Position,
    },
}
