//! Description of how the synced value is exported to a host.
//!
//! A host (a wallpaper plugin runtime, or the bundled CLI) exposes
//! [`SyncValue`] as the instantiable type `WallpaperSync` with a single
//! `currentImage` property under a versioned namespace. Each screen
//! instantiates its own value; they share state through the sync file.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::SyncConfig;
use crate::constants::{PLUGIN_URI, PLUGIN_VERSION, PROPERTY_NAME, TYPE_NAME};
use crate::sync::SyncValue;

/// The exported type, its namespace and the file its instances share.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub uri: &'static str,
    pub version: String,
    pub type_name: &'static str,
    pub property: &'static str,
    pub notify_signal: String,
    pub sync_file: PathBuf,
    #[serde(skip)]
    config: SyncConfig,
}

impl Registration {
    /// Describes the type exported with the given configuration.
    #[must_use]
    pub fn new(config: SyncConfig) -> Self {
        let (major, minor) = PLUGIN_VERSION;

        Self {
            uri: PLUGIN_URI,
            version: format!("{major}.{minor}"),
            type_name: TYPE_NAME,
            property: PROPERTY_NAME,
            notify_signal: format!("{PROPERTY_NAME}Changed"),
            sync_file: config.sync_file_path(),
            config,
        }
    }

    /// The statement a declarative host uses to load the type.
    #[must_use]
    pub fn import_statement(&self) -> String { format!("import {} {}", self.uri, self.version) }

    /// Creates a new, independent instance of the exported type.
    #[must_use]
    pub fn instantiate(&self) -> SyncValue { SyncValue::with_config(self.config.clone()) }
}

impl Default for Registration {
    fn default() -> Self { Self::new(SyncConfig::default()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_names() {
        let registration = Registration::new(SyncConfig::new("/cache/span"));

        assert_eq!(registration.uri, "org.kde.plasma.wallpaper.span");
        assert_eq!(registration.version, "1.0");
        assert_eq!(registration.type_name, "WallpaperSync");
        assert_eq!(registration.property, "currentImage");
        assert_eq!(registration.notify_signal, "currentImageChanged");
        assert_eq!(registration.sync_file, PathBuf::from("/cache/span/wallpaper-span.sync"));
    }

    #[test]
    fn test_import_statement() {
        let registration = Registration::new(SyncConfig::new("/cache/span"));
        assert_eq!(registration.import_statement(), "import org.kde.plasma.wallpaper.span 1.0");
    }

    #[test]
    fn test_serializes_without_config() {
        let registration = Registration::new(SyncConfig::new("/cache/span"));
        let json = serde_json::to_value(&registration).unwrap();

        assert_eq!(json["typeName"], "WallpaperSync");
        assert_eq!(json["notifySignal"], "currentImageChanged");
        assert!(json.get("config").is_none());
    }

    #[test]
    fn test_instances_share_the_sync_file() {
        let temp = tempfile::tempdir().unwrap();
        let registration = Registration::new(SyncConfig::new(temp.path()).without_watch());

        let first = registration.instantiate();
        let second = registration.instantiate();
        first.set("/walls/shared.jpg");
        second.handle_file_change();

        assert_eq!(second.get(), "/walls/shared.jpg");
        assert_eq!(first.sync_file_path(), second.sync_file_path());
    }
}
