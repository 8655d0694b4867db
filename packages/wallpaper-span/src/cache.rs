//! Cache directory utilities.
//!
//! The sync file lives in the user's cache directory so it survives restarts
//! without being treated as configuration. Uses `$XDG_CACHE_HOME/{APP_CACHE_ID}`
//! (or the platform equivalent), falling back to `/tmp/{APP_CACHE_ID}` if the
//! cache directory is unavailable.

use std::path::{Path, PathBuf};

use crate::constants::APP_CACHE_ID;
use crate::error::SyncError;

/// Returns the root cache directory for the application.
#[must_use]
pub fn get_cache_dir() -> PathBuf {
    dirs::cache_dir().map_or_else(
        || PathBuf::from(format!("/tmp/{APP_CACHE_ID}")),
        |cache| cache.join(APP_CACHE_ID),
    )
}

/// Creates `dir` and any missing parents.
///
/// # Errors
///
/// Returns [`SyncError::CreateCacheDir`] if the directory cannot be created.
pub fn create_cache_dir(dir: &Path) -> Result<(), SyncError> {
    std::fs::create_dir_all(dir)
        .map_err(|source| SyncError::CreateCacheDir { path: dir.to_path_buf(), source })
}

/// Makes sure `dir` exists, logging a warning when it cannot be created.
///
/// Returns `true` if the directory exists afterwards.
pub fn ensure_cache_dir(dir: &Path) -> bool {
    match create_cache_dir(dir) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "failed to create cache directory");
            false
        }
    }
}
