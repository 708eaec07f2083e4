//! The section command

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use confkit_core::Registry;

use crate::error::Result;

/// Print every key of `section`, sorted by key.
pub fn run_section(
    out: &mut dyn Write,
    registry: &Registry,
    adapter: Option<&str>,
    file: &Path,
    section: &str,
    json: bool,
) -> Result<()> {
    let config = super::load(registry, adapter, file)?;
    let entries: BTreeMap<String, String> = config.get_section(section)?.into_iter().collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        for (key, value) in &entries {
            writeln!(out, "{key} = {value}")?;
        }
    }
    Ok(())
}
