//! Error types for SYML parsing.

use thiserror::Error;

/// Result type for SYML parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error type for SYML parsing.
///
/// Every variant carries the 1-based number of the offending line, and the
/// rendered message always starts with `Line N: `.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `key: value` line whose key is empty after trimming.
    #[error("Line {line}: Empty key not allowed")]
    EmptyKey { line: usize },

    /// A `- item` line with no list header before it.
    #[error("Line {line}: List item without a key")]
    ListItemWithoutKey { line: usize },

    /// A line that looked like a pair but could not be split.
    #[error("Line {line}: Invalid key-value format (expected 'key: value')")]
    InvalidKeyValue { line: usize },

    /// A line that is neither a comment, a list item, nor a pair.
    #[error("Line {line}: Invalid line format: {text}")]
    InvalidLine { line: usize, text: String },
}

impl ParseError {
    /// The 1-based line number the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::EmptyKey { line }
            | ParseError::ListItemWithoutKey { line }
            | ParseError::InvalidKeyValue { line }
            | ParseError::InvalidLine { line, .. } => *line,
        }
    }

    /// The cause of the error without the `Line N: ` prefix.
    pub fn message(&self) -> String {
        match self {
            ParseError::EmptyKey { .. } => "Empty key not allowed".to_string(),
            ParseError::ListItemWithoutKey { .. } => "List item without a key".to_string(),
            ParseError::InvalidKeyValue { .. } => {
                "Invalid key-value format (expected 'key: value')".to_string()
            }
            ParseError::InvalidLine { text, .. } => format!("Invalid line format: {}", text),
        }
    }
}
