//! TOML adapter using toml_edit for format preservation
//!
//! Tables (including inline tables) are sections. Saving keeps comments
//! and layout of everything that was not written through `set`.

use std::collections::HashMap;
use std::path::Path;

use confkit_core::key::checked_segments;
use confkit_core::{Config, Configer, Error, Result, Value, convert, io};
use toml_edit::{DocumentMut, Item, TableLike};

const FORMAT: &str = "TOML";

/// Factory for TOML documents
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlAdapter;

impl TomlAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Config for TomlAdapter {
    fn name(&self) -> &'static str {
        "toml"
    }

    fn parse_data(&self, data: &[u8]) -> Result<Box<dyn Configer>> {
        let text = std::str::from_utf8(data).map_err(|e| Error::parse(FORMAT, e.to_string()))?;
        Ok(Box::new(TomlConfiger::parse_str(text)?))
    }
}

/// Parsed TOML document
#[derive(Debug, Clone)]
pub struct TomlConfiger {
    doc: DocumentMut,
}

impl TomlConfiger {
    pub fn parse_str(text: &str) -> Result<Self> {
        let doc: DocumentMut = text
            .parse()
            .map_err(|e: toml_edit::TomlError| Error::parse(FORMAT, e.to_string()))?;
        Ok(Self { doc })
    }

    /// Render the document, preserving untouched formatting.
    pub fn render(&self) -> String {
        self.doc.to_string()
    }

    fn lookup(&self, key: &str) -> Option<&Item> {
        let segments = checked_segments(key).ok()?;
        let item = segments
            .iter()
            .try_fold(self.doc.as_item(), |item, segment| {
                item.as_table_like()?.get(segment)
            })?;
        (!item.is_none()).then_some(item)
    }

    fn lookup_text(&self, key: &str) -> Option<String> {
        self.lookup(key).map(item_text)
    }
}

fn item_text(item: &Item) -> String {
    match item_to_json(item) {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn table_to_json(table: &dyn TableLike) -> Value {
    let map = table
        .iter()
        .map(|(k, item)| (k.to_string(), item_to_json(item)))
        .collect();
    Value::Object(map)
}

fn item_to_json(item: &Item) -> Value {
    match item {
        Item::Value(v) => value_to_json(v),
        Item::Table(t) => table_to_json(t),
        Item::ArrayOfTables(arr) => Value::Array(arr.iter().map(|t| table_to_json(t)).collect()),
        Item::None => Value::Null,
    }
}

fn value_to_json(v: &toml_edit::Value) -> Value {
    match v {
        toml_edit::Value::String(s) => Value::String(s.value().to_string()),
        toml_edit::Value::Integer(i) => Value::Number((*i.value()).into()),
        toml_edit::Value::Float(f) => serde_json::Number::from_f64(*f.value())
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(f.value().to_string())),
        toml_edit::Value::Boolean(b) => Value::Bool(*b.value()),
        toml_edit::Value::Datetime(d) => Value::String(d.value().to_string()),
        toml_edit::Value::Array(arr) => Value::Array(arr.iter().map(value_to_json).collect()),
        toml_edit::Value::InlineTable(t) => table_to_json(t),
    }
}

impl Configer for TomlConfiger {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let segments = checked_segments(key)?;
        let (last, parents) = segments
            .split_last()
            .ok_or_else(|| Error::invalid_key(key, "key is empty"))?;

        let mut item: &mut Item = self.doc.as_item_mut();
        for segment in parents {
            let table = item.as_table_like_mut().ok_or_else(|| {
                Error::invalid_key(key, format!("parent of {segment:?} is not a table"))
            })?;
            item = table.entry(segment).or_insert(toml_edit::table());
        }
        let table = item.as_table_like_mut().ok_or_else(|| {
            Error::invalid_key(key, format!("parent of {last:?} is not a table"))
        })?;
        table.insert(last, toml_edit::value(value));
        Ok(())
    }

    fn string(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(item) if !is_container(item) => item_text(item),
            _ => String::new(),
        }
    }

    /// Arrays yield their elements; any other value is split on `,`.
    fn strings(&self, key: &str) -> Vec<String> {
        match self.lookup(key).map(item_to_json) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            Some(Value::Object(_)) | None => Vec::new(),
            Some(Value::String(s)) => convert::split_strings(&s),
            Some(other) => convert::split_strings(&other.to_string()),
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
        self.lookup(key)
            .map(item_to_json)
            .ok_or_else(|| Error::key_not_found(key))
    }

    fn get_section(&self, section: &str) -> Result<HashMap<String, String>> {
        self.lookup(section)
            .and_then(Item::as_table_like)
            .map(|table| {
                table
                    .iter()
                    .map(|(k, item)| (k.to_string(), item_text(item)))
                    .collect()
            })
            .ok_or_else(|| Error::SectionNotFound {
                section: section.to_string(),
            })
    }

    fn save_config_file(&self, path: &Path) -> Result<()> {
        tracing::debug!(format = FORMAT, path = %path.display(), "Saving configuration");
        io::write_atomic(path, self.render().as_bytes())
    }
}

fn is_container(item: &Item) -> bool {
    item.is_array() || item.is_array_of_tables() || item.as_table_like().is_some()
}
