//! TOML transcoding: render a SYML document as TOML text.
//!
//! Mapping from SYML to TOML:
//!   - Value::Null          -> error (TOML has no null)
//!   - Value::Boolean       -> TOML boolean
//!   - Value::Integer       -> TOML integer
//!   - Value::Float         -> TOML float
//!   - Value::String        -> TOML string
//!   - Value::List          -> TOML array
//!   - Document             -> top-level table with sorted keys
//!
//! Lossy edges:
//!   - TOML has no null type; a null anywhere in the document is an error.

use libsyml::{Document, Value};
use toml_edit::DocumentMut;

/// Encode a SYML document as a TOML string.
pub fn encode(doc: &Document) -> Result<String, String> {
    let mut out = DocumentMut::new();
    let mut keys: Vec<&String> = doc.keys().collect();
    keys.sort();
    for k in keys {
        let value = value_to_toml(&doc[k]).map_err(|e| format!("{} (key \"{}\")", e, k))?;
        out[k.as_str()] = toml_edit::Item::Value(value);
    }
    Ok(out.to_string())
}

fn value_to_toml(value: &Value) -> Result<toml_edit::Value, String> {
    match value {
        Value::Null => Err("TOML has no null type".to_string()),
        Value::Boolean(b) => Ok(toml_edit::Value::Boolean(toml_edit::Formatted::new(*b))),
        Value::Integer(n) => Ok(toml_edit::Value::Integer(toml_edit::Formatted::new(*n))),
        Value::Float(f) => Ok(toml_edit::Value::Float(toml_edit::Formatted::new(*f))),
        Value::String(s) => Ok(toml_edit::Value::String(toml_edit::Formatted::new(
            s.clone(),
        ))),
        Value::List(items) => {
            let mut arr = toml_edit::Array::new();
            for v in items {
                arr.push(value_to_toml(v)?);
            }
            Ok(toml_edit::Value::Array(arr))
        }
    }
}
