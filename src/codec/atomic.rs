//! Whole-file replacement through a sibling temp file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};

/// Replaces the file at `path` with `contents`.
///
/// The bytes go to `<path>.tmp` first and are synced before the rename, so
/// readers see either the old file or the complete new one.
pub fn write_atomic(path: &Path, contents: &[u8]) -> LedgerResult<()> {
    let path_str = path.display().to_string();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LedgerError::persistence(&path_str, e))?;
    }

    let tmp_path = temp_path_for(path);
    let written = File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(contents)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp_path, path));

    if let Err(err) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(LedgerError::persistence(path_str, err));
    }

    debug!(path = %path_str, bytes = contents.len(), "Replaced file");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
