//! Line-oriented ini adapter
//!
//! ```text
//! ; keys before any header live in [default]
//! appname = demo
//!
//! [db]
//! host = localhost
//! tags = primary, eu
//! ```
//!
//! `db::host` reads `host` in `[db]`; a bare key reads `[default]`.
//! `strings` splits on `,`. Comments must start their own line.
//! Unquoted values of the form `${NAME||fallback}` are expanded from the
//! environment when read; saving writes the placeholder back, not the
//! expanded text. Comments are not kept when the file is saved.

use std::collections::HashMap;
use std::path::Path;

use confkit_core::convert::{self, expand_env};
use confkit_core::key::split_section_key;
use confkit_core::{Config, Configer, Error, Result, Value, io};

/// Section holding keys that appear before any `[section]` header
pub const DEFAULT_SECTION: &str = "default";

const FORMAT: &str = "ini";

/// Factory for [`IniConfiger`]
#[derive(Debug, Default, Clone, Copy)]
pub struct IniAdapter;

impl IniAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Config for IniAdapter {
    fn name(&self) -> &'static str {
        FORMAT
    }

    fn parse_data(&self, data: &[u8]) -> Result<Box<dyn Configer>> {
        let text = std::str::from_utf8(data).map_err(|e| Error::parse(FORMAT, e.to_string()))?;
        Ok(Box::new(IniConfiger::parse_str(text)?))
    }
}

/// One `key = value` line. `raw` is the text as written, before any
/// environment expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    raw: String,
    /// `raw` has the `${NAME}` shape but must be read verbatim.
    literal: bool,
}

impl Entry {
    fn value(&self) -> String {
        if self.literal {
            self.raw.clone()
        } else {
            expand_env(&self.raw)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Insert or overwrite; returns true if the key already existed.
    fn insert(&mut self, key: &str, raw: String, literal: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => {
                entry.raw = raw;
                entry.literal = literal;
                true
            }
            None => {
                self.entries.push(Entry {
                    key: key.to_string(),
                    raw,
                    literal,
                });
                false
            }
        }
    }
}

/// Parsed ini document. Sections and keys keep their source order.
///
/// Values keep their source text; `${NAME||fallback}` placeholders are
/// resolved each time they are read and written back unchanged on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniConfiger {
    sections: Vec<Section>,
}

impl IniConfiger {
    /// Parse ini text.
    pub fn parse_str(text: &str) -> Result<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut doc = Self::default();
        let mut current = DEFAULT_SECTION.to_string();

        for (index, raw_line) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') {
                let name = line
                    .strip_prefix('[')
                    .and_then(|l| l.strip_suffix(']'))
                    .ok_or_else(|| {
                        Error::parse(FORMAT, format!("unterminated section header at line {line_no}"))
                    })?
                    .trim();
                if name.is_empty() {
                    return Err(Error::parse(
                        FORMAT,
                        format!("empty section name at line {line_no}"),
                    ));
                }
                doc.section_mut(name);
                current = name.to_string();
                continue;
            }

            let (key, written) = match line.split_once('=') {
                Some((k, v)) => (k.trim(), v.trim()),
                None => (line, ""),
            };
            if key.is_empty() {
                return Err(Error::parse(FORMAT, format!("missing key at line {line_no}")));
            }

            // A quoted placeholder is plain text.
            let value = unquote(written);
            let literal = value.len() != written.len() && convert::is_env_reference(value);

            if doc
                .section_mut(&current)
                .insert(key, value.to_string(), literal)
            {
                tracing::warn!(
                    section = %current,
                    key,
                    line = line_no,
                    "Duplicate ini key, keeping the last value"
                );
            }
        }

        tracing::debug!(sections = doc.sections.len(), "Parsed ini configuration");
        Ok(doc)
    }

    /// Render the document as ini text.
    ///
    /// Keys of the default section come first, without a header.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(default) = self.section(DEFAULT_SECTION) {
            for entry in &default.entries {
                write_entry(&mut out, entry);
            }
        }

        for section in self.sections.iter().filter(|s| s.name != DEFAULT_SECTION) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for entry in &section.entries {
                write_entry(&mut out, entry);
            }
        }

        out
    }

    /// Section names in source order.
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    fn section_mut(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let (section, key) = split_section_key(key);
        self.section(section.unwrap_or(DEFAULT_SECTION))?
            .get(key)
            .map(Entry::value)
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

fn needs_quotes(value: &str) -> bool {
    value != value.trim() || (value.len() >= 2 && value.starts_with('"') && value.ends_with('"'))
}

fn write_entry(out: &mut String, entry: &Entry) {
    out.push_str(&entry.key);
    out.push_str(" = ");
    if entry.literal || needs_quotes(&entry.raw) {
        out.push('"');
        out.push_str(&entry.raw);
        out.push('"');
    } else {
        out.push_str(&entry.raw);
    }
    out.push('\n');
}

fn validate_section(full_key: &str, section: &str) -> Result<()> {
    if section.is_empty() {
        return Err(Error::invalid_key(full_key, "section name is empty"));
    }
    if section != section.trim() {
        return Err(Error::invalid_key(full_key, "section name has surrounding whitespace"));
    }
    if section.contains([']', '\n', '\r']) {
        return Err(Error::invalid_key(full_key, "section name contains ']' or a line break"));
    }
    Ok(())
}

fn validate_key(full_key: &str, key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_key(full_key, "key is empty"));
    }
    if key.contains(confkit_core::SECTION_SEPARATOR) {
        return Err(Error::invalid_key(full_key, "ini keys have at most one section level"));
    }
    if key != key.trim() {
        return Err(Error::invalid_key(full_key, "key has surrounding whitespace"));
    }
    if key.contains(['=', '\n', '\r']) {
        return Err(Error::invalid_key(full_key, "key contains '=' or a line break"));
    }
    if key.starts_with(['[', '#', ';']) {
        return Err(Error::invalid_key(full_key, "key starts with '[', '#' or ';'"));
    }
    Ok(())
}

impl Configer for IniConfiger {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let (section, name) = split_section_key(key);
        if let Some(section) = section {
            validate_section(key, section)?;
        }
        validate_key(key, name)?;
        if value.contains(['\n', '\r']) {
            return Err(Error::invalid_value(key, "ini values cannot span lines"));
        }

        self.section_mut(section.unwrap_or(DEFAULT_SECTION)).insert(
            name,
            value.to_string(),
            convert::is_env_reference(value),
        );
        Ok(())
    }

    fn string(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_default()
    }

    fn strings(&self, key: &str) -> Vec<String> {
        convert::split_strings(&self.lookup(key).unwrap_or_default())
    }

    fn int(&self, key: &str) -> Result<i32> {
        convert::to_int(key, self.lookup(key).as_deref())
    }

    fn int64(&self, key: &str) -> Result<i64> {
        convert::to_int64(key, self.lookup(key).as_deref())
    }

    fn bool(&self, key: &str) -> Result<bool> {
        convert::to_bool(key, self.lookup(key).as_deref())
    }

    fn float(&self, key: &str) -> Result<f64> {
        convert::to_float(key, self.lookup(key).as_deref())
    }

    fn diy(&self, key: &str) -> Result<Value> {
        self.lookup(key)
            .map(Value::String)
            .ok_or_else(|| Error::key_not_found(key))
    }

    fn get_section(&self, section: &str) -> Result<HashMap<String, String>> {
        self.section(section)
            .map(|s| {
                s.entries
                    .iter()
                    .map(|e| (e.key.clone(), e.value()))
                    .collect()
            })
            .ok_or_else(|| Error::SectionNotFound {
                section: section.to_string(),
            })
    }

    fn save_config_file(&self, path: &Path) -> Result<()> {
        tracing::debug!(path = %path.display(), "Saving ini configuration");
        io::write_atomic(path, self.render().as_bytes())
    }
}
