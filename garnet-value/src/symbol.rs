//! Interned symbols and the [`Env`] that owns them.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// An interned name. Cloning a `Symbol` is cheap; comparison is by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

/// Value construction context.
/// Every symbol created through the same `Env` shares a single allocation per distinct name.
#[derive(Debug, Default)]
pub struct Env {
    symbols: HashSet<Arc<str>>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol for `name`, creating it if this is the first time `name` is seen.
    ///
    /// # Example
    /// ```
    /// use garnet_value::Env;
    /// let mut env = Env::new();
    /// let a = env.intern("puts");
    /// let b = env.intern("puts");
    /// assert_eq!(a, b);
    /// assert_eq!(env.symbol_count(), 1);
    /// ```
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(existing) = self.symbols.get(name) {
            return Symbol(Arc::clone(existing));
        }
        let symbol: Arc<str> = Arc::from(name);
        self.symbols.insert(Arc::clone(&symbol));
        Symbol(symbol)
    }

    /// Number of distinct symbols interned so far.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }
}
