//! Configuration for a synced value.

use std::path::{Path, PathBuf};

use crate::cache::get_cache_dir;
use crate::constants::SYNC_FILE_NAME;

/// Where the sync file lives and whether it should be watched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Directory holding the sync file. Created on construction if missing.
    pub cache_dir: PathBuf,
    /// File name of the sync file inside `cache_dir`.
    pub file_name: String,
    /// Whether to watch the sync file in the background.
    ///
    /// When disabled, the owner is responsible for calling
    /// [`SyncValue::handle_file_change`](crate::SyncValue::handle_file_change).
    pub watch: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            cache_dir: get_cache_dir(),
            file_name: SYNC_FILE_NAME.to_string(),
            watch: true,
        }
    }
}

impl SyncConfig {
    /// Creates a configuration rooted at `cache_dir` with default settings.
    #[must_use]
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self { cache_dir: cache_dir.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Disables the background file watch.
    #[must_use]
    pub fn without_watch(mut self) -> Self {
        self.watch = false;
        self
    }

    /// Full path of the sync file.
    #[must_use]
    pub fn sync_file_path(&self) -> PathBuf { self.cache_dir.join(&self.file_name) }

    /// The directory holding the sync file.
    #[must_use]
    pub fn cache_dir(&self) -> &Path { &self.cache_dir }
}
