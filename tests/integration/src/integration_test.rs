//! End-to-end tests across the registry and the built-in adapters
//!
//! Exercises the full flow: register adapters -> parse a source -> read,
//! edit and save -> reparse, including adapters defined outside the crates.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use confkit_adapters::{IniAdapter, registry};
use confkit_core::{Config, Configer, Error, Registry, Result, Value, convert};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

/// Flat `KEY=VALUE` format registered by the application itself.
#[derive(Debug, Default)]
struct EnvFileAdapter;

#[derive(Debug, Default)]
struct EnvFile {
    entries: Vec<(String, String)>,
}

impl EnvFile {
    fn raw(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl Config for EnvFileAdapter {
    fn name(&self) -> &'static str {
        "envfile"
    }

    fn parse_data(&self, data: &[u8]) -> Result<Box<dyn Configer>> {
        let text = std::str::from_utf8(data).map_err(|e| Error::parse("envfile", e.to_string()))?;
        let mut file = EnvFile::default();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| Error::parse("envfile", format!("missing '=' in {line:?}")))?;
            file.entries.push((key.trim().to_string(), value.trim().to_string()));
        }
        Ok(Box::new(file))
    }
}

impl Configer for EnvFile {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn string(&self, key: &str) -> String {
        self.raw(key).unwrap_or_default().to_string()
    }

    fn strings(&self, key: &str) -> Vec<String> {
        convert::split_strings(self.raw(key).unwrap_or_default())
    }

    fn int(&self, key: &str) -> Result<i32> {
        convert::to_int(key, self.raw(key))
    }

    fn int64(&self, key: &str) -> Result<i64> {
        convert::to_int64(key, self.raw(key))
    }

    fn bool(&self, key: &str) -> Result<bool> {
        convert::to_bool(key, self.raw(key))
    }

    fn float(&self, key: &str) -> Result<f64> {
        convert::to_float(key, self.raw(key))
    }

    fn diy(&self, key: &str) -> Result<Value> {
        self.raw(key)
            .map(|v| Value::String(v.to_string()))
            .ok_or_else(|| Error::key_not_found(key))
    }

    fn get_section(&self, _section: &str) -> Result<HashMap<String, String>> {
        Err(Error::SectionsUnsupported {
            format: "envfile".to_string(),
        })
    }

    fn save_config_file(&self, path: &Path) -> Result<()> {
        let body: String = self
            .entries
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect();
        confkit_core::io::write_atomic(path, body.as_bytes())
    }
}

fn full_registry() -> Registry {
    let mut registry = registry();
    registry.register("envfile", EnvFileAdapter);
    registry
}

#[test]
fn test_application_adapter_sits_beside_builtins() {
    let registry = full_registry();
    assert_eq!(registry.names(), vec!["envfile", "ini", "json", "toml", "yaml"]);

    let config = registry
        .new_config_data("envfile", b"PORT=8080\nHOSTS=a, b\nDEBUG=on\n")
        .unwrap();
    assert_eq!(config.int("PORT").unwrap(), 8080);
    assert_eq!(config.strings("HOSTS"), vec!["a", "b"]);
    assert!(config.bool("DEBUG").unwrap());
    assert!(matches!(
        config.get_section("any"),
        Err(Error::SectionsUnsupported { .. })
    ));
}

#[test]
fn test_alias_shares_adapter_instance() {
    let mut registry = registry();
    let ini = registry.get("ini").unwrap();
    registry.register_shared("conf", Arc::clone(&ini));

    assert!(Arc::ptr_eq(&registry.get("conf").unwrap(), &ini));
    let config = registry.new_config_data("conf", b"[db]\nhost = h\n").unwrap();
    assert_eq!(config.string("db::host"), "h");
}

#[test]
fn test_copy_values_between_formats() {
    let temp = TempDir::new().unwrap();
    let registry = full_registry();

    let source = temp.path().join("legacy.ini");
    fs::write(
        &source,
        "appname = demo\n\n[db]\nhost = localhost\nport = 5432\n",
    )
    .unwrap();
    let ini = registry.new_config("ini", &source).unwrap();

    let mut json = registry.new_config_data("json", b"").unwrap();
    json.set("appname", &ini.string("appname")).unwrap();
    for (key, value) in ini.get_section("db").unwrap() {
        json.set(&format!("db::{key}"), &value).unwrap();
    }
    let target = temp.path().join("out").join("app.json");
    json.save_config_file(&target).unwrap();

    let reparsed = registry.new_config("json", &target).unwrap();
    assert_eq!(reparsed.diy("db").unwrap()["host"], json!("localhost"));
    assert_eq!(reparsed.int("db::port").unwrap(), 5432);
    assert_eq!(reparsed.string("appname"), "demo");
}

#[test]
fn test_edit_and_save_every_builtin() {
    let temp = TempDir::new().unwrap();
    let registry = full_registry();

    for (name, file, contents) in [
        ("ini", "app.ini", "[server]\nport = 80\n"),
        ("json", "app.json", r#"{"server": {"port": 80}}"#),
        ("yaml", "app.yaml", "server:\n  port: 80\n"),
        ("toml", "app.toml", "[server]\nport = 80\n"),
        ("envfile", "app.env", "server=unused\n"),
    ] {
        let path = temp.path().join(file);
        fs::write(&path, contents).unwrap();

        let key = if name == "envfile" { "port" } else { "server::port" };
        let mut config = registry.new_config(name, &path).unwrap();
        config.set(key, "8080").unwrap();
        config.save_config_file(&path).unwrap();

        let reparsed = registry.new_config(name, &path).unwrap();
        assert_eq!(reparsed.int(key).unwrap(), 8080, "adapter {name}");
        assert_eq!(reparsed.default_int("missing", 7), 7, "adapter {name}");
    }
}

#[test]
fn test_shared_registry_across_threads() {
    let registry = Arc::new(full_registry());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let data = format!("{{\"worker\": {i}}}");
                let config = registry.new_config_data("json", data.as_bytes()).unwrap();
                config.int("worker").unwrap()
            })
        })
        .collect();

    let mut seen: Vec<i32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    seen.sort();
    assert_eq!(seen, (0..8).collect::<Vec<_>>());
}

#[test]
fn test_direct_adapter_use_without_registry() {
    let config = IniAdapter::new().parse_data(b"debug = true\n").unwrap();
    assert!(config.bool("debug").unwrap());
    assert!(!config.default_bool("verbose", false));
}

#[test]
fn test_unknown_adapter_is_error() {
    let registry = full_registry();
    let err = registry.new_config_data("xml", b"<a/>").unwrap_err();
    assert!(matches!(err, Error::UnknownAdapter { ref name } if name == "xml"));
}
