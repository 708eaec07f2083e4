//! Key addressing
//!
//! Keys are flat strings. Section-aware adapters read `section::key` as a
//! key inside a named section; tree adapters read every `::` as one level of
//! nesting (`server::tls::cert`).

use crate::error::{Error, Result};

/// Separator between a section (or parent object) and a key.
pub const SECTION_SEPARATOR: &str = "::";

/// Split `section::key` at the first separator.
///
/// Returns `None` as the section for a bare key.
///
/// ```
/// use confkit_core::key::split_section_key;
///
/// assert_eq!(split_section_key("db::host"), (Some("db"), "host"));
/// assert_eq!(split_section_key("host"), (None, "host"));
/// ```
pub fn split_section_key(key: &str) -> (Option<&str>, &str) {
    match key.split_once(SECTION_SEPARATOR) {
        Some((section, rest)) => (Some(section), rest),
        None => (None, key),
    }
}

/// Split a key into its nesting levels.
///
/// ```
/// use confkit_core::key::segments;
///
/// assert_eq!(segments("server::tls::cert"), vec!["server", "tls", "cert"]);
/// assert_eq!(segments("name"), vec!["name"]);
/// ```
pub fn segments(key: &str) -> Vec<&str> {
    key.split(SECTION_SEPARATOR).collect()
}

/// Split a key into its nesting levels, rejecting empty keys and segments.
pub fn checked_segments(key: &str) -> Result<Vec<&str>> {
    if key.is_empty() {
        return Err(Error::invalid_key(key, "key is empty"));
    }
    let parts = segments(key);
    if parts.iter().any(|p| p.is_empty()) {
        return Err(Error::invalid_key(key, "key contains an empty segment"));
    }
    Ok(parts)
}
