//! Phase 1: Scanner
//!
//! The scanner converts raw source text into scan lines. It performs:
//! - Line splitting and 1-based numbering (blank and comment lines count)
//! - Whitespace trimming
//! - Comment and blank line filtering
//! - Shape classification: list item, scalar pair, or list header
//!
//! Values are left as raw tokens; coercion happens in the parser.

use crate::error::{ParseError, Result};

/// The shape of one significant line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `- token`
    Item(&'a str),
    /// `key: token` with a non-empty token.
    Pair(&'a str, &'a str),
    /// `key:` or `key: ` opening a list.
    Header(&'a str),
}

/// A single classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLine<'a> {
    pub kind: LineKind<'a>,
    /// One-based line number for error reporting.
    pub line_num: usize,
}

/// Scan source text into classified lines, stopping at the first bad line.
pub fn scan(source: &str) -> impl Iterator<Item = Result<ScanLine<'_>>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, line)| classify(line.trim(), i + 1).transpose())
}

/// Classify a trimmed line. Blank and comment lines yield `None`.
fn classify(stripped: &str, line_num: usize) -> Result<Option<ScanLine<'_>>> {
    if stripped.is_empty() || stripped.starts_with('#') {
        return Ok(None);
    }

    // "- " prefix is the list marker (dash + space)
    if let Some(rest) = stripped.strip_prefix("- ") {
        return Ok(Some(ScanLine {
            kind: LineKind::Item(rest.trim()),
            line_num,
        }));
    }

    if !(stripped.contains(": ") || stripped.ends_with(':')) {
        return Err(ParseError::InvalidLine {
            line: line_num,
            text: stripped.to_string(),
        });
    }

    let kind = match stripped.split_once(": ") {
        Some((key, value)) => {
            let key = key.trim();
            if key.is_empty() {
                return Err(ParseError::EmptyKey { line: line_num });
            }
            match value.trim() {
                "" => LineKind::Header(key),
                value => LineKind::Pair(key, value),
            }
        }
        // No separator: only a bare "key:" list header is left.
        None => match stripped.strip_suffix(':') {
            Some(key) => LineKind::Header(key.trim()),
            None => return Err(ParseError::InvalidKeyValue { line: line_num }),
        },
    };

    Ok(Some(ScanLine { kind, line_num }))
}
