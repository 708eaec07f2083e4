//! Factory and accessor contracts implemented by every adapter

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::io;

/// Accessor over one parsed configuration.
///
/// Keys may address a section with `section::key` when the format has
/// sections. Only [`string`](Configer::string) and
/// [`strings`](Configer::strings) are silent when a key is absent; the other
/// typed getters return an error, and the `default_*` family substitutes the
/// caller's fallback instead.
pub trait Configer: Send + fmt::Debug {
    /// Write a string value at `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// The value at `key`, or an empty string if absent.
    fn string(&self, key: &str) -> String;

    /// The value at `key` split into a list, or an empty list if absent.
    fn strings(&self, key: &str) -> Vec<String>;

    /// The value at `key` as a 32-bit integer.
    ///
    /// Values outside the `i32` range are a conversion error even when they
    /// fit in 64 bits; read those with [`int64`](Configer::int64).
    fn int(&self, key: &str) -> Result<i32>;

    fn int64(&self, key: &str) -> Result<i64>;

    fn bool(&self, key: &str) -> Result<bool>;

    fn float(&self, key: &str) -> Result<f64>;

    /// Raw adapter-specific value at `key`.
    ///
    /// Callers match on the [`Value`] variant they expect from the adapter
    /// they constructed.
    fn diy(&self, key: &str) -> Result<Value>;

    /// All key/value pairs of a named section.
    fn get_section(&self, section: &str) -> Result<HashMap<String, String>>;

    /// Serialize the current state to `path`, replacing its content.
    fn save_config_file(&self, path: &Path) -> Result<()>;

    fn default_string(&self, key: &str, default: &str) -> String {
        let value = self.string(key);
        if value.is_empty() {
            default.to_string()
        } else {
            value
        }
    }

    fn default_strings(&self, key: &str, default: Vec<String>) -> Vec<String> {
        let values = self.strings(key);
        if values.is_empty() { default } else { values }
    }

    fn default_int(&self, key: &str, default: i32) -> i32 {
        self.int(key).unwrap_or(default)
    }

    fn default_int64(&self, key: &str, default: i64) -> i64 {
        self.int64(key).unwrap_or(default)
    }

    fn default_bool(&self, key: &str, default: bool) -> bool {
        self.bool(key).unwrap_or(default)
    }

    fn default_float(&self, key: &str, default: f64) -> f64 {
        self.float(key).unwrap_or(default)
    }
}

/// Factory that turns configuration source into a [`Configer`].
///
/// Implementations hold no parsed state and are shared across threads by
/// the [`Registry`](crate::Registry).
pub trait Config: Send + Sync {
    /// Format label used in errors and log fields
    fn name(&self) -> &'static str;

    /// Parse configuration held in memory.
    fn parse_data(&self, data: &[u8]) -> Result<Box<dyn Configer>>;

    /// Read and parse the file at `path`.
    fn parse(&self, path: &Path) -> Result<Box<dyn Configer>> {
        let data = io::read_source(path)?;
        self.parse_data(&data)
    }
}
