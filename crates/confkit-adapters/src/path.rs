//! Key traversal for document trees
//!
//! Tree adapters address nested objects with `::`-separated keys:
//! `server::tls::cert` walks `{"server": {"tls": {"cert": ...}}}`.

use confkit_core::key::checked_segments;
use confkit_core::{Error, Result};
use serde_json::{Map, Value};

/// Get the value at a `::`-separated key.
///
/// Returns `None` if any level is missing or is not an object.
///
/// ```
/// use confkit_adapters::path::get_at_key;
/// use serde_json::json;
///
/// let value = json!({"db": {"host": "localhost"}});
/// assert_eq!(get_at_key(&value, "db::host"), Some(&json!("localhost")));
/// assert_eq!(get_at_key(&value, "db::port"), None);
/// ```
pub fn get_at_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let segments = checked_segments(key).ok()?;
    segments
        .iter()
        .try_fold(value, |current, segment| current.as_object()?.get(*segment))
}

/// Set the value at a `::`-separated key, creating intermediate objects.
///
/// Fails if an intermediate level exists but is not an object.
///
/// ```
/// use confkit_adapters::path::{get_at_key, set_at_key};
/// use serde_json::json;
///
/// let mut value = json!({});
/// set_at_key(&mut value, "db::host", json!("localhost")).unwrap();
/// assert_eq!(value, json!({"db": {"host": "localhost"}}));
/// ```
pub fn set_at_key(root: &mut Value, key: &str, new_value: Value) -> Result<()> {
    let segments = checked_segments(key)?;
    let (last, parents) = segments
        .split_last()
        .ok_or_else(|| Error::invalid_key(key, "key is empty"))?;

    let mut current = root;
    for segment in parents {
        let map = current
            .as_object_mut()
            .ok_or_else(|| Error::invalid_key(key, format!("{segment:?} is under a non-object")))?;
        current = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    let map = current
        .as_object_mut()
        .ok_or_else(|| Error::invalid_key(key, format!("parent of {last:?} is not an object")))?;
    map.insert(last.to_string(), new_value);
    Ok(())
}

/// Text form of a value as the typed getters see it.
///
/// Strings are returned as-is, other scalars in their canonical form, null
/// as an empty string, and arrays/objects as compact JSON.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
