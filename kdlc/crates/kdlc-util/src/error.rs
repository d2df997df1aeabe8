//! Core error type for the KDL pipeline.
//!
//! There is a single error category: syntactic. Lexing and parsing both
//! abort at the first error, so every stage returns [`SyntaxResult`] and
//! propagates with `?`; no diagnostics are accumulated and no partial
//! document is ever produced.

use thiserror::Error;

use crate::Span;

/// A syntax error encountered while lexing or parsing KDL source.
///
/// Positions follow the source-observation rule: `line` is 1-based,
/// `column` is 0-based.
///
/// # Examples
///
/// ```
/// use kdlc_util::SyntaxError;
///
/// let err = SyntaxError::new("Unexpected character '@'", 3, 14);
/// assert_eq!(err.to_string(), "Unexpected character '@' at 3:14");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message} at {line}:{column}")]
pub struct SyntaxError {
    /// Human-readable description of the problem.
    pub message: String,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (0-based).
    pub column: u32,
}

impl SyntaxError {
    /// Create a new syntax error at the given position.
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a syntax error positioned at the start of a span.
    ///
    /// # Examples
    ///
    /// ```
    /// use kdlc_util::{Span, SyntaxError};
    ///
    /// let err = SyntaxError::at("Expected node name", Span::point(2, 0));
    /// assert_eq!(err.line, 2);
    /// ```
    pub fn at(message: impl Into<String>, span: Span) -> Self {
        Self::new(message, span.line, span.column)
    }
}

/// Result type alias used throughout the lexer and parser.
pub type SyntaxResult<T> = std::result::Result<T, SyntaxError>;
