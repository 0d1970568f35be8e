//! Source code representation and error management.

use std::{cell::RefCell, fmt};
use thiserror::Error;

/// Represents source code.
pub struct Source<'a> {
    /// Original source code.
    pub content: &'a str,
    /// Accumulated errors.
    pub errors: ErrorReporter,
    /// Byte offset of the first character of every line.
    line_starts: Vec<usize>,
}

impl<'a> Source<'a> {
    /// Create a new `Source` with the specified `content`.
    pub fn new(content: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            content,
            errors: ErrorReporter::new(),
            line_starts,
        }
    }

    /// Returns `true` if `Source` has no accumulated errors. Returns `false` otherwise.
    pub fn has_no_errors(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts a byte offset into `content` to a 1-based line and column.
    ///
    /// # Example
    /// ```
    /// use garnet_source::{Position, Source};
    /// let source = Source::new("x = 1\nfoo x");
    /// assert_eq!(source.position_of(0), Position::new(1, 1));
    /// assert_eq!(source.position_of(10), Position::new(2, 5));
    /// ```
    pub fn position_of(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next_line) => next_line - 1,
        };
        let line_start = self.line_starts[line];
        let column = self.content[line_start..offset.min(self.content.len())]
            .chars()
            .count();
        Position::new(line + 1, column + 1)
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Source::new(content)
    }
}

/// A 1-based line and column in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Represents a syntax error (compile time error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {position}")]
pub struct SyntaxError {
    message: String,
    position: Position,
    /// The text of the offending token, if there is one.
    token: Option<String>,
}

impl SyntaxError {
    /// Create a new syntax error with the specified `message` and `position`.
    pub fn new(message: impl ToString, position: Position) -> Self {
        Self {
            message: message.to_string(),
            position,
            token: None,
        }
    }

    /// Attaches the text of the offending token.
    pub fn with_token(mut self, token: impl ToString) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Manages all the errors.
pub struct ErrorReporter {
    errors: RefCell<Vec<SyntaxError>>,
}

impl ErrorReporter {
    /// Create an empty `ErrorReporter`.
    pub fn new() -> Self {
        Self {
            errors: RefCell::new(Vec::new()),
        }
    }

    /// Adds an error to the `ErrorReporter`.
    /// This method uses the interior mutability pattern. This does not require mutability for ergonomics.
    pub fn add_error(&self, error: SyntaxError) {
        // This should be the only place where self.errors is borrowed mutably.
        self.errors.borrow_mut().push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }

    /// Returns a copy of the first reported error, if any.
    pub fn first(&self) -> Option<SyntaxError> {
        self.errors.borrow().first().cloned()
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.errors.borrow();
        for error in errors.iter() {
            writeln!(
                f,
                "ERROR: {message} at {position}",
                message = error.message,
                position = error.position
            )?;
        }

        Ok(())
    }
}
