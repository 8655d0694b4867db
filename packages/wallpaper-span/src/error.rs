//! Error types for wallpaper-span.
//!
//! [`SyncError`] covers the failures of the synced value itself. None of them
//! are fatal: `SyncValue` logs them and keeps going. [`SpanError`] is the
//! application-level error returned by the CLI.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Failures that can happen while mirroring the value to the sync file.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The cache directory could not be created.
    #[error("failed to create cache directory {}: {source}", .path.display())]
    CreateCacheDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file watch could not be registered.
    #[error("failed to watch {}: {source}", .path.display())]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
    /// The sync file exists but could not be opened.
    #[error("failed to open sync file for reading {}: {source}", .path.display())]
    OpenForRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The sync file was opened but reading its contents failed.
    #[error("error reading sync file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The sync file could not be opened for writing.
    #[error("failed to open sync file for writing {}: {source}", .path.display())]
    OpenForWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The sync file was opened but writing the value failed.
    #[error("error writing to sync file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during application execution.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum SpanError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Synchronization failed.
    #[error("Sync error: {0}")]
    SyncError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<SyncError> for SpanError {
    fn from(err: SyncError) -> Self { Self::SyncError(err.to_string()) }
}

impl From<std::io::Error> for SpanError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for SpanError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<String> for SpanError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for SpanError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_open_for_read_display_contains_path() {
        let err = SyncError::OpenForRead {
            path: PathBuf::from("/cache/wallpaper-span.sync"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("reading"));
        assert!(msg.contains("/cache/wallpaper-span.sync"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn test_read_display() {
        let err = SyncError::Read {
            path: PathBuf::from("/cache/file"),
            source: io::Error::other("is a directory"),
        };
        assert!(err.to_string().starts_with("error reading sync file"));
    }

    #[test]
    fn test_write_display() {
        let err = SyncError::Write {
            path: PathBuf::from("/cache/file"),
            source: io::Error::other("disk full"),
        };
        assert!(err.to_string().starts_with("error writing to sync file"));
    }

    #[test]
    fn test_sync_error_keeps_source() {
        use std::error::Error as _;

        let err = SyncError::OpenForWrite {
            path: PathBuf::from("/cache/file"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_span_error_from_sync_error() {
        let err: SpanError = SyncError::CreateCacheDir {
            path: PathBuf::from("/nope"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert!(matches!(err, SpanError::SyncError(_)));
        assert!(err.to_string().contains("Sync error"));
    }

    #[test]
    fn test_io_error_from_conversion() {
        let err: SpanError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, SpanError::IoError(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_from_str() {
        let err: SpanError = "test error".into();
        assert!(matches!(err, SpanError::CommandError(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_error_serializes_with_kind() {
        let err = SpanError::InvalidArguments("empty image".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("InvalidArguments"));
        assert!(json.contains("empty image"));
    }
}
