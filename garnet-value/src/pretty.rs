//! Terminal rendering for [`Value`]s.

use crate::Value;
use console::style;
use std::fmt;

/// Displays a [`Value`] in the same layout as its `Display` impl, colored for a terminal.
/// Tags are bold, symbols cyan, strings green and numbers yellow.
pub struct Pretty<'a> {
    value: &'a Value,
    colored: bool,
}

impl<'a> Pretty<'a> {
    /// Colors follow the terminal detection of [`console::colors_enabled`].
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            colored: console::colors_enabled(),
        }
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
        match value {
            Value::Sexp(sexp) => {
                write!(f, "s(")?;
                write!(
                    f,
                    "{}",
                    style(sexp.tag()).bold().force_styling(self.colored)
                )?;
                for child in sexp.children() {
                    write!(f, ", ")?;
                    self.fmt_value(f, child)?;
                }
                write!(f, ")")
            }
            Value::Symbol(symbol) => {
                write!(f, "{}", style(symbol).cyan().force_styling(self.colored))
            }
            Value::String(_) => {
                write!(f, "{}", style(value).green().force_styling(self.colored))
            }
            Value::Integer(_) | Value::Float(_) => {
                write!(f, "{}", style(value).yellow().force_styling(self.colored))
            }
            Value::Nil | Value::True | Value::False => {
                write!(f, "{}", style(value).magenta().force_styling(self.colored))
            }
        }
    }
}

impl<'a> fmt::Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_value(f, self.value)
    }
}
