//! Re-armable watch on the sync file.
//!
//! The watch is registered on the sync file's parent directory and events are
//! filtered by file name, so the file may be created, truncated or replaced by
//! rename without losing the registration. The registration itself can still
//! be dropped by the backend (the directory is removed, or it did not exist
//! when the watch was first registered), so callers treat it as single-shot
//! and call [`SyncWatch::ensure_armed`] after every read and write.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use notify::event::{AccessKind, AccessMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::SyncError;

/// Watch on the directory holding the sync file.
pub struct SyncWatch {
    watcher: RecommendedWatcher,
    file_path: PathBuf,
    file_name: OsString,
    dir: PathBuf,
    armed: bool,
}

impl SyncWatch {
    /// Creates the watcher, forwarding raw backend events to `tx`.
    ///
    /// The watch is not registered until [`arm`](Self::arm) is called.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Watch`] if the platform watcher cannot be created.
    pub fn new(file_path: &Path, tx: Sender<notify::Result<Event>>) -> Result<Self, SyncError> {
        let watcher = notify::recommended_watcher(tx)
            .map_err(|source| SyncError::Watch { path: file_path.to_path_buf(), source })?;

        let file_name = file_path.file_name().map(std::ffi::OsStr::to_os_string).unwrap_or_default();
        let dir = file_path.parent().unwrap_or(file_path).to_path_buf();

        Ok(Self {
            watcher,
            file_path: file_path.to_path_buf(),
            file_name,
            dir,
            armed: false,
        })
    }

    /// Registers the watch, replacing any previous registration.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Watch`] if the directory cannot be watched, which
    /// is expected while the cache directory does not exist yet.
    pub fn arm(&mut self) -> Result<(), SyncError> {
        self.disarm();

        self.watcher
            .watch(&self.dir, RecursiveMode::NonRecursive)
            .map_err(|source| SyncError::Watch { path: self.dir.clone(), source })?;
        self.armed = true;
        Ok(())
    }

    fn disarm(&mut self) {
        if std::mem::take(&mut self.armed) {
            // The backend may already have forgotten the path.
            let _ = self.watcher.unwatch(&self.dir);
        }
    }

    /// Whether the registration still covers the sync file.
    #[must_use]
    pub fn is_armed(&self) -> bool { self.armed && self.dir.is_dir() }

    /// Re-registers the watch if it was dropped.
    ///
    /// Failures are logged at debug level: the next read or write tries again.
    /// Returns `true` if the watch is registered afterwards.
    pub fn ensure_armed(&mut self) -> bool {
        if self.is_armed() {
            return true;
        }

        match self.arm() {
            Ok(()) => {
                tracing::debug!(path = %self.file_path.display(), "sync file watch re-armed");
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "failed to re-arm sync file watch");
                false
            }
        }
    }

    /// Records backend bookkeeping carried by `event`.
    ///
    /// Removal of the watched directory drops the registration, so the watch
    /// is marked as disarmed and re-armed by the next [`ensure_armed`](Self::ensure_armed).
    pub fn observe(&mut self, event: &Event) {
        if matches!(event.kind, EventKind::Remove(_)) && event.paths.iter().any(|p| p == &self.dir)
        {
            self.armed = false;
        }
    }

    /// Whether `event` may have changed the contents of the sync file.
    #[must_use]
    pub fn affects_sync_file(&self, event: &Event) -> bool {
        let relevant_kind = match event.kind {
            EventKind::Access(AccessKind::Close(AccessMode::Write)) => true,
            EventKind::Access(_) => false,
            _ => true,
        };

        relevant_kind
            && event.paths.iter().any(|p| p.file_name().is_some_and(|name| name == self.file_name))
    }

    #[cfg(test)]
    fn file_path(&self) -> &Path { &self.file_path }
}
