//! The adapters command

use std::io::Write;

use colored::Colorize;
use confkit_adapters::Format;
use confkit_core::Registry;

use crate::error::Result;

/// List registered adapters with the extensions that select them.
pub fn run_adapters(out: &mut dyn Write, registry: &Registry) -> Result<()> {
    for name in registry.names() {
        let extensions = [Format::Ini, Format::Json, Format::Yaml, Format::Toml]
            .into_iter()
            .find(|format| format.adapter_name() == name)
            .map(|format| format.extensions().join(", "))
            .unwrap_or_default();
        writeln!(out, "  {:<8} {}", name.green(), extensions.dimmed())?;
    }
    Ok(())
}
