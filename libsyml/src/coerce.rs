//! Scalar coercion.
//!
//! Turns a trimmed scalar token into a typed [`Value`]. Coercion never fails:
//! anything that is not a keyword, a number, or a quoted string is kept as a
//! plain string.

use crate::value::Value;

/// Coerce a trimmed scalar token into a value.
///
/// Rules, first match wins:
///
/// 1. `true` / `yes` (any case) is `Boolean(true)`
/// 2. `false` / `no` (any case) is `Boolean(false)`
/// 3. `null` / `~` (any case) is `Null`
/// 4. `-?[0-9]+` is an `Integer`
/// 5. `-?[0-9]+.[0-9]+` is a `Float`
/// 6. a token wrapped in matching `"` or `'` is the `String` between them
/// 7. anything else is the `String` itself
///
/// # Example
///
/// ```
/// use libsyml::{coerce, Value};
///
/// assert_eq!(coerce("42"), Value::Integer(42));
/// assert_eq!(coerce("'New York'"), Value::String("New York".to_string()));
/// ```
pub fn coerce(token: &str) -> Value {
    if let Some(value) = parse_keyword(token) {
        return value;
    }
    if let Some(value) = parse_number(token) {
        return value;
    }
    match strip_quotes(token) {
        Some(inner) => Value::String(inner.to_string()),
        None => Value::String(token.to_string()),
    }
}

// ============================================================================
// Keyword Parsing
// ============================================================================

/// Check if s is a keyword and return its value.
fn parse_keyword(s: &str) -> Option<Value> {
    let is = |word: &str| s.eq_ignore_ascii_case(word);
    if is("true") || is("yes") {
        Some(Value::Boolean(true))
    } else if is("false") || is("no") {
        Some(Value::Boolean(false))
    } else if is("null") || s == "~" {
        Some(Value::Null)
    } else {
        None
    }
}

// ============================================================================
// Number Parsing
// ============================================================================

/// Attempt to parse s as a number.
///
/// Integers that do not fit in an `i64` are not numbers here; the caller
/// keeps them as strings.
fn parse_number(s: &str) -> Option<Value> {
    if is_integer_pattern(s) {
        return s.parse::<i64>().ok().map(Value::Integer);
    }
    if is_float_pattern(s) {
        return s.parse::<f64>().ok().map(Value::Float);
    }
    None
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Check if string matches integer pattern: -?[0-9]+
fn is_integer_pattern(s: &str) -> bool {
    is_digits(s.strip_prefix('-').unwrap_or(s))
}

/// Check if string matches float pattern: -?[0-9]+\.[0-9]+
///
/// No exponent, no leading `+`, and digits are required on both sides of the
/// point.
fn is_float_pattern(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    match s.split_once('.') {
        Some((before, after)) => is_digits(before) && is_digits(after),
        None => false,
    }
}

// ============================================================================
// String Parsing
// ============================================================================

/// Strip one pair of matching outer quotes. Escapes are not interpreted.
fn strip_quotes(s: &str) -> Option<&str> {
    ['"', '\'']
        .into_iter()
        .find_map(|q| s.strip_prefix(q)?.strip_suffix(q))
}
