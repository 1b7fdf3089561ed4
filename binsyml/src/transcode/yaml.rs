//! YAML transcoding: render a SYML document as YAML text.
//!
//! Mapping from SYML to YAML:
//!   - Value::Null         -> YAML null
//!   - Value::Boolean      -> YAML bool
//!   - Value::Integer      -> YAML integer
//!   - Value::Float        -> YAML float
//!   - Value::String       -> YAML string (quoted by the emitter when needed)
//!   - Value::List         -> YAML sequence
//!   - Document            -> YAML mapping with sorted keys

use libsyml::{Document, Value};

/// Encode a SYML document as a YAML string.
pub fn encode(doc: &Document) -> Result<String, String> {
    let mut map = serde_yaml::Mapping::new();
    let mut keys: Vec<&String> = doc.keys().collect();
    keys.sort();
    for k in keys {
        map.insert(serde_yaml::Value::String(k.clone()), value_to_yaml(&doc[k]));
    }
    serde_yaml::to_string(&serde_yaml::Value::Mapping(map))
        .map_err(|e| format!("YAML encode error: {}", e))
}

fn value_to_yaml(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Null => serde_yaml::Value::Null,
        Value::Boolean(b) => serde_yaml::Value::Bool(*b),
        Value::Integer(n) => serde_yaml::Value::Number(serde_yaml::Number::from(*n)),
        Value::Float(f) => serde_yaml::Value::Number(serde_yaml::Number::from(*f)),
        Value::String(s) => serde_yaml::Value::String(s.clone()),
        Value::List(items) => serde_yaml::Value::Sequence(items.iter().map(value_to_yaml).collect()),
    }
}
