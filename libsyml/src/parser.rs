//! Phase 2: Document Parser
//!
//! Folds the scanner's classified lines into a [`Document`]. The only state
//! carried between lines is the list currently being collected: its key and
//! the items seen so far. A pending list is flushed into the document when the
//! next pair or header line arrives, and once more at end of input.

use crate::coerce::coerce;
use crate::error::{ParseError, Result};
use crate::scanner::{LineKind, ScanLine};
use crate::value::{Document, Value};

/// Per-parse state. Items are only ever non-empty while `pending_list_key` is set.
#[derive(Debug, Default)]
struct ParserState {
    result: Document,
    pending_list_key: Option<String>,
    pending_list_items: Vec<Value>,
}

impl ParserState {
    /// Commit the pending list, if it collected any items.
    fn flush(&mut self) {
        if self.pending_list_items.is_empty() {
            return;
        }
        if let Some(key) = self.pending_list_key.take() {
            let items = std::mem::take(&mut self.pending_list_items);
            self.result.insert(key, Value::List(items));
        }
    }

    fn step(mut self, line: ScanLine<'_>) -> Result<Self> {
        match line.kind {
            LineKind::Item(token) => {
                if self.pending_list_key.is_none() {
                    return Err(ParseError::ListItemWithoutKey {
                        line: line.line_num,
                    });
                }
                self.pending_list_items.push(coerce(token));
            }
            LineKind::Header(key) => {
                self.flush();
                self.pending_list_key = Some(key.to_string());
                self.pending_list_items.clear();
            }
            LineKind::Pair(key, token) => {
                self.flush();
                self.result.insert(key.to_string(), coerce(token));
                // A scalar ends list tracking, even for a header with no items.
                self.pending_list_key = None;
            }
        }
        Ok(self)
    }

    fn finish(mut self) -> Document {
        self.flush();
        self.result
    }
}

/// Parse scanned lines into a document, failing on the first bad line.
pub fn parse_lines<'a, I>(lines: I) -> Result<Document>
where
    I: IntoIterator<Item = Result<ScanLine<'a>>>,
{
    lines
        .into_iter()
        .try_fold(ParserState::default(), |state, line| state.step(line?))
        .map(ParserState::finish)
}
