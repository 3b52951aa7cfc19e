//! Error types for JSON parsing.

use thiserror::Error;

/// Errors that can occur while parsing a JSON document.
///
/// Every variant carries the byte offset at which the problem was detected,
/// so callers can point at the exact position in the input. Failures are
/// never recovered locally: an error inside a nested value aborts the
/// enclosing container parse and propagates to the top-level caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer ended in the middle of a construct (e.g. `[1, 2`).
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// The next character does not begin any grammar production at this
    /// position (e.g. a stray `:` or a non-string object key).
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { offset: usize, found: char },

    /// A numeric literal failed both integer and floating-point conversion.
    #[error("malformed number literal {literal:?} at offset {offset}")]
    NumberFormat { offset: usize, literal: String },

    /// A string was opened at `offset` but the buffer ended before the
    /// closing quote.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// Container nesting exceeded the configured maximum depth.
    #[error("nesting depth {depth} exceeds limit {limit} at offset {offset}")]
    NestingTooDeep {
        offset: usize,
        depth: usize,
        limit: usize,
    },
}

impl ParseError {
    /// Byte offset into the input at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedEnd { offset }
            | ParseError::UnexpectedChar { offset, .. }
            | ParseError::NumberFormat { offset, .. }
            | ParseError::UnterminatedString { offset }
            | ParseError::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

/// Convenience alias used throughout jsontree-core.
pub type Result<T> = std::result::Result<T, ParseError>;
