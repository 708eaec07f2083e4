//! Command implementations for confkit-cli

pub mod get;
pub mod list;
pub mod section;
pub mod set;

pub use get::run_get;
pub use list::run_adapters;
pub use section::run_section;
pub use set::run_set;

use std::path::Path;

use confkit_adapters::Format;
use confkit_core::{Configer, Registry};

use crate::error::{CliError, Result};

/// Pick the adapter name: the explicit flag, else the file extension.
pub fn resolve_adapter<'a>(explicit: Option<&'a str>, file: &Path) -> Result<&'a str> {
    if let Some(name) = explicit {
        return Ok(name);
    }
    Format::from_path(file)
        .map(|format| format.adapter_name())
        .ok_or_else(|| {
            CliError::user(format!(
                "cannot infer the adapter for {}; pass --adapter",
                file.display()
            ))
        })
}

/// Parse `file` with the resolved adapter.
pub fn load(registry: &Registry, adapter: Option<&str>, file: &Path) -> Result<Box<dyn Configer>> {
    let name = resolve_adapter(adapter, file)?;
    tracing::debug!(adapter = name, file = %file.display(), "Loading configuration");
    Ok(registry.new_config(name, file)?)
}
