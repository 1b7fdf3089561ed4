//! SYML (Simple YAML) parser implementation.
//!
//! SYML is a deliberately reduced subset of YAML: top-level `key: value`
//! pairs, flat lists introduced by a `key:` header and `- item` lines, and
//! scalars that are strings, integers, floats, booleans, or null. There is no
//! nesting, no flow style, no anchors, and no inline comments.
//!
//! # Parsing Pipeline
//!
//! The parser operates in two phases:
//!
//! 1. **Scanner**: Splits source text into numbered lines, drops blanks and
//!    comments, and classifies each remaining line as a list item, a scalar
//!    pair, or a list header.
//!
//! 2. **Document Parser**: Folds the classified lines into a [`Document`],
//!    collecting list items under their header and coercing every scalar
//!    token with [`coerce`].
//!
//! Errors carry the 1-based line number and stop the parse at the first bad
//! line.

mod coerce;
mod encode;
mod error;
mod parser;
mod scanner;
mod value;

pub use coerce::coerce;
pub use encode::{to_json, value_to_json};
pub use error::{ParseError, Result};
pub use value::{Document, Value};

/// Parse a SYML document from a string.
///
/// # Example
///
/// ```
/// use libsyml::{parse, Value};
///
/// let doc = parse("count: 42\nfeatures:\n- fast\n- small\n").unwrap();
/// assert_eq!(doc["count"], Value::Integer(42));
/// assert_eq!(doc["features"].as_list().map(|xs| xs.len()), Some(2));
/// ```
pub fn parse(input: &str) -> Result<Document> {
    // Phase 1: Classify source lines
    let lines = scanner::scan(input);

    // Phase 2: Fold lines into a document
    parser::parse_lines(lines)
}
