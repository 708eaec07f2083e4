//! Accessor shared by the JSON and YAML adapters
//!
//! Both documents are held as a `serde_json::Value` tree whose root is an
//! object. Nested objects double as sections.

use std::collections::HashMap;
use std::path::Path;

use confkit_core::{Configer, Error, Result, Value, convert, io};

use crate::path::{get_at_key, set_at_key, text_of};

/// Serialization syntax of a [`TreeConfiger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeSyntax {
    Json,
    Yaml,
}

impl TreeSyntax {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Parsed JSON or YAML document
#[derive(Debug, Clone, PartialEq)]
pub struct TreeConfiger {
    syntax: TreeSyntax,
    root: Value,
}

impl TreeConfiger {
    /// Wrap a parsed document. The root must be an object.
    pub fn new(syntax: TreeSyntax, root: Value) -> Result<Self> {
        match root {
            Value::Object(_) => Ok(Self { syntax, root }),
            // An empty YAML document deserializes to null.
            Value::Null => Ok(Self {
                syntax,
                root: Value::Object(Default::default()),
            }),
            other => Err(Error::parse(
                syntax.label(),
                format!("document root must be an object, found {}", kind_of(&other)),
            )),
        }
    }

    pub fn syntax(&self) -> TreeSyntax {
        self.syntax
    }

    /// The whole document.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Render the document in its own syntax.
    pub fn render(&self) -> Result<String> {
        match self.syntax {
            TreeSyntax::Json => serde_json::to_string_pretty(&self.root)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| Error::serialize(self.syntax.label(), e.to_string())),
            TreeSyntax::Yaml => serde_yaml::to_string(&self.root)
                .map_err(|e| Error::serialize(self.syntax.label(), e.to_string())),
        }
    }

    fn lookup_text(&self, key: &str) -> Option<String> {
        get_at_key(&self.root, key).map(text_of)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Configer for TreeConfiger {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        set_at_key(&mut self.root, key, Value::String(value.to_string()))
    }

    fn string(&self, key: &str) -> String {
        match get_at_key(&self.root, key) {
            Some(Value::Array(_) | Value::Object(_)) | None => String::new(),
            Some(value) => text_of(value),
        }
    }

    /// Arrays yield their elements; any other value is split on `,`.
    fn strings(&self, key: &str) -> Vec<String> {
        match get_at_key(&self.root, key) {
            Some(Value::Array(items)) => items.iter().map(text_of).collect(),
            Some(Value::Object(_)) | None => Vec::new(),
            Some(value) => convert::split_strings(&text_of(value)),
        }
    }

    fn int(&self, key: &str) -> Result<i32> {
        convert::to_int(key, self.lookup_text(key).as_deref())
    }

    fn int64(&self, key: &str) -> Result<i64> {
        convert::to_int64(key, self.lookup_text(key).as_deref())
    }

    fn bool(&self, key: &str) -> Result<bool> {
        convert::to_bool(key, self.lookup_text(key).as_deref())
    }

    fn float(&self, key: &str) -> Result<f64> {
        convert::to_float(key, self.lookup_text(key).as_deref())
    }

    fn diy(&self, key: &str) -> Result<Value> {
        get_at_key(&self.root, key)
            .cloned()
            .ok_or_else(|| Error::key_not_found(key))
    }

    fn get_section(&self, section: &str) -> Result<HashMap<String, String>> {
        match get_at_key(&self.root, section) {
            Some(Value::Object(map)) => Ok(map
                .iter()
                .map(|(k, v)| (k.clone(), text_of(v)))
                .collect()),
            _ => Err(Error::SectionNotFound {
                section: section.to_string(),
            }),
        }
    }

    fn save_config_file(&self, path: &Path) -> Result<()> {
        tracing::debug!(format = self.syntax.label(), path = %path.display(), "Saving configuration");
        io::write_atomic(path, self.render()?.as_bytes())
    }
}
