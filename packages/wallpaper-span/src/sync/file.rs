//! Reading and writing the sync file.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::Path;

use crate::error::SyncError;

/// Reads the value stored in the sync file.
///
/// Returns `Ok(None)` when the file does not exist or its first line is empty
/// after trimming. Only the first line is considered; bytes that are not valid
/// UTF-8 are replaced rather than rejected.
///
/// # Errors
///
/// Returns [`SyncError::OpenForRead`] if the file exists but cannot be opened,
/// and [`SyncError::Read`] if reading its contents fails.
pub fn read_value(path: &Path) -> Result<Option<String>, SyncError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(SyncError::OpenForRead { path: path.to_path_buf(), source }),
    };

    let mut line = Vec::new();
    BufReader::new(file)
        .read_until(b'\n', &mut line)
        .map_err(|source| SyncError::Read { path: path.to_path_buf(), source })?;

    let line = String::from_utf8_lossy(&line);
    let value = line.trim();
    if value.is_empty() {
        return Ok(None);
    }

    Ok(Some(value.to_string()))
}

/// Overwrites the sync file with `value`, verbatim and without a trailing newline.
///
/// # Errors
///
/// Returns [`SyncError::OpenForWrite`] if the file cannot be created or
/// truncated, and [`SyncError::Write`] if writing the contents fails.
pub fn write_value(path: &Path, value: &str) -> Result<(), SyncError> {
    let mut file = File::create(path)
        .map_err(|source| SyncError::OpenForWrite { path: path.to_path_buf(), source })?;

    file.write_all(value.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| SyncError::Write { path: path.to_path_buf(), source })
}
