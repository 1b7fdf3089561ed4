//! Encode SYML documents as JSON.
//!
//! The output is pretty-printed with two-space indentation and keys sorted,
//! so the same document always renders to the same text.

use crate::value::{Document, Value};

/// Encode a whole document as a JSON object.
///
/// # Example
///
/// ```
/// use libsyml::{parse, to_json};
///
/// let doc = parse("name: demo\ntags:\n- a\n").unwrap();
/// assert_eq!(
///     to_json(&doc),
///     "{\n  \"name\": \"demo\",\n  \"tags\": [\n    \"a\"\n  ]\n}"
/// );
/// ```
pub fn to_json(doc: &Document) -> String {
    if doc.is_empty() {
        return "{}".to_string();
    }
    let mut keys: Vec<&String> = doc.keys().collect();
    keys.sort();
    let items: Vec<String> = keys
        .iter()
        .map(|k| format!("  {}: {}", encode_json_string(k), encode_json(&doc[*k], 1)))
        .collect();
    format!("{{\n{}\n}}", items.join(",\n"))
}

/// Encode a single value as JSON.
pub fn value_to_json(value: &Value) -> String {
    encode_json(value, 0)
}

fn encode_json(value: &Value, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    let pad1 = "  ".repeat(indent + 1);

    match value {
        Value::Null => "null".to_string(),
        Value::Boolean(true) => "true".to_string(),
        Value::Boolean(false) => "false".to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Float(f) => {
            if f.is_nan() || f.is_infinite() {
                "null".to_string() // JSON doesn't support NaN/Infinity
            } else {
                format!("{:?}", f)
            }
        }
        Value::String(s) => encode_json_string(s),
        Value::List(items) => {
            if items.is_empty() {
                "[]".to_string()
            } else {
                let items: Vec<String> = items
                    .iter()
                    .map(|v| format!("{}{}", pad1, encode_json(v, indent + 1)))
                    .collect();
                format!("[\n{}\n{}]", items.join(",\n"), pad)
            }
        }
    }
}

fn encode_json_string(s: &str) -> String {
    let mut result = String::from("\"");
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x08' => result.push_str("\\b"),
            '\x0c' => result.push_str("\\f"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
