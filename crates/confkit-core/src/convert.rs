//! Conversions shared by every adapter
//!
//! Adapters store values as text. These helpers give all of them the same
//! rules for booleans, numbers, string lists and environment expansion.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Separator used by [`split_strings`].
pub const LIST_SEPARATOR: char = ',';

static ENV_VALUE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\{([^|{}]+)(?:\|\|(.*))?\}$").unwrap());

/// Parse a boolean the permissive way configuration files spell them.
///
/// ```
/// use confkit_core::convert::parse_bool;
///
/// assert_eq!(parse_bool("on"), Some(true));
/// assert_eq!(parse_bool("N"), Some(false));
/// assert_eq!(parse_bool("maybe"), None);
/// ```
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" | "y" | "Y" | "yes" | "YES" | "Yes" | "on"
        | "ON" | "On" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" | "n" | "N" | "no" | "NO" | "No" | "off"
        | "OFF" | "Off" => Some(false),
        _ => None,
    }
}

/// Split a list value on [`LIST_SEPARATOR`], trimming each element.
///
/// An empty or blank value is an empty list.
///
/// ```
/// use confkit_core::convert::split_strings;
///
/// assert_eq!(split_strings("a, b,c"), vec!["a", "b", "c"]);
/// assert!(split_strings("").is_empty());
/// ```
pub fn split_strings(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        return Vec::new();
    }
    value
        .split(LIST_SEPARATOR)
        .map(|s| s.trim().to_string())
        .collect()
}

/// Check if `value` has the `${NAME}` or `${NAME||fallback}` shape that
/// [`expand_env`] replaces.
///
/// ```
/// use confkit_core::convert::is_env_reference;
///
/// assert!(is_env_reference("${HOME||/root}"));
/// assert!(!is_env_reference("home is ${HOME}"));
/// ```
pub fn is_env_reference(value: &str) -> bool {
    ENV_VALUE_PATTERN.is_match(value.trim())
}

/// Expand a value of the form `${NAME}` or `${NAME||fallback}`.
///
/// The variable wins when it is set and non-empty; otherwise the fallback
/// (or an empty string) is used. Any other value is returned unchanged.
pub fn expand_env(value: &str) -> String {
    expand_with(value, |name| std::env::var(name).ok())
}

/// [`expand_env`] with a caller-supplied variable lookup.
///
/// ```
/// use confkit_core::convert::expand_with;
///
/// let lookup = |name: &str| (name == "PORT").then(|| "8080".to_string());
/// assert_eq!(expand_with("${PORT||80}", lookup), "8080");
/// assert_eq!(expand_with("${HOST||localhost}", lookup), "localhost");
/// ```
pub fn expand_with(value: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let Some(caps) = ENV_VALUE_PATTERN.captures(value.trim()) else {
        return value.to_string();
    };
    match lookup(caps[1].trim()) {
        Some(v) if !v.is_empty() => v,
        _ => caps
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
    }
}

fn parse_number<T: FromStr>(key: &str, raw: Option<&str>, target: &'static str) -> Result<T> {
    let raw = raw.ok_or_else(|| Error::key_not_found(key))?;
    raw.trim()
        .parse::<T>()
        .map_err(|_| Error::conversion(key, raw, target))
}

/// Convert the text stored at `key` to `i32`.
pub fn to_int(key: &str, raw: Option<&str>) -> Result<i32> {
    parse_number(key, raw, "int")
}

/// Convert the text stored at `key` to `i64`.
pub fn to_int64(key: &str, raw: Option<&str>) -> Result<i64> {
    parse_number(key, raw, "int64")
}

/// Convert the text stored at `key` to `f64`.
pub fn to_float(key: &str, raw: Option<&str>) -> Result<f64> {
    parse_number(key, raw, "float")
}

/// Convert the text stored at `key` to `bool` using [`parse_bool`].
pub fn to_bool(key: &str, raw: Option<&str>) -> Result<bool> {
    let raw = raw.ok_or_else(|| Error::key_not_found(key))?;
    parse_bool(raw.trim()).ok_or_else(|| Error::conversion(key, raw, "bool"))
}
