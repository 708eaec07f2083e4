//! The get command

use std::io::Write;
use std::path::Path;

use confkit_core::Registry;

use crate::cli::ValueType;
use crate::error::Result;

/// Print the value at `key` read through the accessor matching `value_type`.
pub fn run_get(
    out: &mut dyn Write,
    registry: &Registry,
    adapter: Option<&str>,
    file: &Path,
    key: &str,
    value_type: ValueType,
) -> Result<()> {
    let config = super::load(registry, adapter, file)?;

    match value_type {
        ValueType::String => writeln!(out, "{}", config.string(key))?,
        ValueType::Strings => {
            for item in config.strings(key) {
                writeln!(out, "{item}")?;
            }
        }
        ValueType::Int => writeln!(out, "{}", config.int(key)?)?,
        ValueType::Int64 => writeln!(out, "{}", config.int64(key)?)?,
        ValueType::Bool => writeln!(out, "{}", config.bool(key)?)?,
        ValueType::Float => writeln!(out, "{}", config.float(key)?)?,
        ValueType::Raw => writeln!(out, "{}", serde_json::to_string_pretty(&config.diy(key)?)?)?,
    }

    Ok(())
}
