//! Call argument handling: flattening and query/body partitioning.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, ErrorKind, Result};

/// Flat call arguments, keyed by parameter name.
pub type Arguments = Map<String, Value>;

/// Serialize a parameter value into flat call arguments.
///
/// Anything that serializes to a JSON object is accepted; `null` means no
/// arguments.
pub fn to_arguments<P: Serialize + ?Sized>(params: &P) -> Result<Arguments> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(Error::new(ErrorKind::InvalidArguments(format!(
            "expected a JSON object, got {}",
            json_type(&other)
        )))),
    }
}

/// Keep only the entries of `args` named in `keys`, skipping `null` values.
///
/// The result iterates in `keys` order.
pub fn pick(args: &Arguments, keys: &[&str]) -> Arguments {
    let mut picked = Map::new();
    for key in keys {
        match args.get(*key) {
            None | Some(Value::Null) => {}
            Some(value) => {
                picked.insert((*key).to_string(), value.clone());
            }
        }
    }
    picked
}

/// Flatten a query partition into string pairs.
///
/// Arrays repeat the key once per element; objects are sent as JSON text.
pub fn query_pairs(query: &Arguments) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(query.len());
    for (key, value) in query {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(s) = scalar_to_string(item) {
                        pairs.push((key.clone(), s));
                    }
                }
            }
            other => {
                if let Some(s) = scalar_to_string(other) {
                    pairs.push((key.clone(), s));
                }
            }
        }
    }
    pairs
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested => Some(nested.to_string()),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
