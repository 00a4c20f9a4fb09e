//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Temp sibling used by [`write_atomic`].
pub fn temp_path_for(path: &Path) -> io::Result<PathBuf> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no parent"))?;
    let filename = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;

    Ok(parent.join(format!(".{}.tmp", filename.to_string_lossy())))
}

/// Write content atomically (write to a temp sibling, then rename).
///
/// Readers see either no file or the complete content. The temp file is
/// removed again when either the write or the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let tmp_path = temp_path_for(path)?;

    if let Err(e) = fs::write(&tmp_path, content).and_then(|()| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    Ok(())
}

/// Create a directory and all missing parents, appending the directories
/// that did not exist before the call to `created` (outermost first).
///
/// `created` is filled even when creation fails part way, so callers can
/// report exactly what was left behind.
pub fn create_dir_tracked(path: &Path, created: &mut Vec<PathBuf>) -> io::Result<()> {
    let missing: Vec<PathBuf> = path
        .ancestors()
        .take_while(|p| !p.as_os_str().is_empty() && !p.exists())
        .map(Path::to_path_buf)
        .collect();

    let result = fs::create_dir_all(path);

    created.extend(missing.into_iter().rev().filter(|dir| dir.is_dir()));

    result
}
