//! Local variable tracking.

use std::iter::FromIterator;

/// The local variables known in one scope (the top level or a method body), in declaration order.
/// A declared name stays visible for the rest of the scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locals {
    names: Vec<String>,
}

impl Locals {
    /// An empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `name` has been declared in this scope.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|local| local == name)
    }

    /// Makes `name` visible to every later lookup.
    /// Returns `false` if it was already declared.
    pub fn declare(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Locals {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut locals = Locals::new();
        for name in iter {
            locals.declare(&name.into());
        }
        locals
    }
}
