//! JSON adapter
//!
//! Nested objects are sections: `db::host` reads `{"db": {"host": ...}}`.
//! `strings` returns the elements of an array, or splits a string on `,`.

use confkit_core::{Config, Configer, Error, Result, Value};

use super::tree::{TreeConfiger, TreeSyntax};

/// Factory for JSON documents
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonAdapter;

impl JsonAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Config for JsonAdapter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn parse_data(&self, data: &[u8]) -> Result<Box<dyn Configer>> {
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Box::new(TreeConfiger::new(TreeSyntax::Json, Value::Null)?));
        }
        let value: Value = serde_json::from_slice(data)
            .map_err(|e| Error::parse(TreeSyntax::Json.label(), e.to_string()))?;
        Ok(Box::new(TreeConfiger::new(TreeSyntax::Json, value)?))
    }
}
