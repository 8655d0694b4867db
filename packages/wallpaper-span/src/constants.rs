//! Application-wide constants.

/// Identifier used for the per-user cache directory.
pub const APP_CACHE_ID: &str = "org.kde.plasma.wallpaper.span";

/// Name of the file shared by every instance to exchange the current image.
pub const SYNC_FILE_NAME: &str = "wallpaper-span.sync";

/// Namespace the synced value is exported under.
pub const PLUGIN_URI: &str = "org.kde.plasma.wallpaper.span";

/// Major and minor version of the exported type.
pub const PLUGIN_VERSION: (u32, u32) = (1, 0);

/// Name of the exported, instantiable type.
pub const TYPE_NAME: &str = "WallpaperSync";

/// Name of the readable/writable property holding the image.
pub const PROPERTY_NAME: &str = "currentImage";

/// Prefix for worker threads spawned by this crate.
pub const THREAD_PREFIX: &str = "wallpaper-span";
