//! Blocking file access used by adapters

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Read the whole file at `path`.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Write content atomically to a file with locking.
///
/// Writes a uniquely named sibling temp file under an exclusive advisory
/// lock, syncs it, then renames it over `path`. The parent directory is
/// created if needed.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            parent
        }
        None => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    write_locked(temp_file.as_file_mut(), content).map_err(|e| Error::io(temp_file.path(), e))?;

    // Dropping the PersistError removes the temp file.
    temp_file
        .persist(path)
        .map_err(|e| Error::io(path, e.error))?;
    Ok(())
}

fn write_locked(file: &mut File, content: &[u8]) -> std::io::Result<()> {
    file.lock_exclusive()?;
    file.write_all(content)?;
    file.sync_all()?;
    FileExt::unlock(file)
}
