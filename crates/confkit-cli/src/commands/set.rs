//! The set command

use std::path::Path;

use confkit_core::Registry;

use crate::error::Result;

/// Set `key` to `value` and save to `output`, or back to `file`.
pub fn run_set(
    registry: &Registry,
    adapter: Option<&str>,
    file: &Path,
    key: &str,
    value: &str,
    output: Option<&Path>,
) -> Result<()> {
    let mut config = super::load(registry, adapter, file)?;
    config.set(key, value)?;

    let target = output.unwrap_or(file);
    config.save_config_file(target)?;
    tracing::info!(key, file = %target.display(), "Saved configuration");
    Ok(())
}
