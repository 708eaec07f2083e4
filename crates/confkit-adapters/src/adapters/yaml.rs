//! YAML adapter using serde_yaml
//!
//! Scalar mapping keys are read as strings. Nested mappings are sections and
//! `strings` returns sequence elements or splits a string on `,`. Tags are
//! dropped: `!secret abc` reads as `abc`.

use confkit_core::{Config, Configer, Error, Result, Value};
use serde_yaml::Value as YamlValue;

use super::tree::{TreeConfiger, TreeSyntax};

/// Factory for YAML documents
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlAdapter;

impl YamlAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Config for YamlAdapter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn parse_data(&self, data: &[u8]) -> Result<Box<dyn Configer>> {
        let yaml: YamlValue = serde_yaml::from_slice(data)
            .map_err(|e| Error::parse(TreeSyntax::Yaml.label(), e.to_string()))?;
        Ok(Box::new(TreeConfiger::new(TreeSyntax::Yaml, yaml_to_json(&yaml)?)?))
    }
}

fn yaml_to_json(value: &YamlValue) -> Result<Value> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                // NaN and infinities have no JSON number; keep their YAML text.
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(n.to_string()))
            }
        }
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(items) => {
            Value::Array(items.iter().map(yaml_to_json).collect::<Result<_>>()?)
        }
        YamlValue::Mapping(map) => {
            let mut object = serde_json::Map::new();
            for (k, v) in map {
                object.insert(mapping_key(k)?, yaml_to_json(v)?);
            }
            Value::Object(object)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value)?,
    })
}

fn mapping_key(key: &YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        _ => Err(Error::parse(
            TreeSyntax::Yaml.label(),
            "mapping keys must be scalars",
        )),
    }
}
