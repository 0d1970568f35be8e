//! Tagged lists, the symbolic form the AST serializes into.

use crate::{Symbol, Value};
use std::fmt;

/// A tagged list such as `s(:call, nil, :puts)`.
/// The first element is always the tag symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Sexp {
    tag: Symbol,
    children: Vec<Value>,
}

impl Sexp {
    /// Create a list containing only `tag`.
    pub fn new(tag: Symbol) -> Self {
        Self {
            tag,
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.children.push(value.into());
    }

    /// Builder form of [`Self::push`].
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.push(value);
        self
    }

    /// The tag symbol at the head of the list.
    pub fn tag(&self) -> &Symbol {
        &self.tag
    }

    /// Every element after the tag.
    pub fn children(&self) -> &[Value] {
        &self.children
    }

    /// Returns the `index`th element after the tag.
    pub fn child(&self, index: usize) -> Option<&Value> {
        self.children().get(index)
    }

    /// Length including the tag.
    pub fn len(&self) -> usize {
        self.children.len() + 1
    }

    /// Returns `true` if the list holds nothing besides its tag.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s({}", self.tag)?;
        for child in &self.children {
            write!(f, ", {}", child)?;
        }
        write!(f, ")")
    }
}
