//! The synced "current image" value.
//!
//! A [`SyncValue`] holds one string and mirrors it to the sync file. Every
//! screen constructs its own instance pointing at the same file; a local
//! [`set`](SyncValue::set) writes the file, and the other instances pick the
//! change up through their file watch and notify their own listeners.
//!
//! Nothing here ever fails loudly. Directory, watch, read and write failures
//! are logged and the value keeps working in a degraded mode.
//!
//! # Threading
//!
//! Watch events arrive on a background thread. Value changes and file I/O are
//! serialized by a single change lock, and listeners run after it is released.
//! A reentrant notify lock is held from each change until its listeners have
//! run, so listeners see changes in the order they were applied.

mod file;
mod listeners;
mod watch;

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};
use std::sync::{Arc, Weak};

use eyeball::{SharedObservable, Subscriber};
use notify::Event;
use parking_lot::{Mutex, ReentrantMutex};

pub use self::file::{read_value, write_value};
pub use self::listeners::{ListenerRegistry, Subscription};
pub use self::watch::SyncWatch;
use crate::cache::ensure_cache_dir;
use crate::config::SyncConfig;
use crate::thread::spawn_named_thread;

/// One instance of the cross-screen current image.
pub struct SyncValue {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    value: SharedObservable<String>,
    listeners: ListenerRegistry,
    /// Serializes value changes together with the file I/O that goes with them.
    change_lock: Mutex<()>,
    /// Keeps notifications in the same order as the value changes. Reentrant so
    /// a listener may call `set` on the same thread.
    notify_lock: ReentrantMutex<()>,
    watch: Mutex<Option<SyncWatch>>,
}

impl Default for SyncValue {
    fn default() -> Self { Self::new() }
}

impl SyncValue {
    /// Creates a value backed by the default sync file in the user cache directory.
    #[must_use]
    pub fn new() -> Self { Self::with_config(SyncConfig::default()) }

    /// Creates a value backed by the sync file described by `config`.
    ///
    /// Creates the cache directory if needed, starts watching (unless disabled)
    /// and seeds the value from the file if it already exists.
    #[must_use]
    pub fn with_config(config: SyncConfig) -> Self {
        ensure_cache_dir(config.cache_dir());

        let inner = Arc::new(Inner {
            path: config.sync_file_path(),
            value: SharedObservable::new(String::new()),
            listeners: ListenerRegistry::new(),
            change_lock: Mutex::new(()),
            notify_lock: ReentrantMutex::new(()),
            watch: Mutex::new(None),
        });

        if config.watch {
            Inner::start_watching(&inner);
        }
        inner.seed();

        Self { inner }
    }

    /// Returns the current image.
    #[must_use]
    pub fn get(&self) -> String { self.inner.value.get() }

    /// Sets the current image, persisting it and notifying listeners.
    ///
    /// Does nothing if `image` equals the current value. A failed write is
    /// logged and does not revert the in-memory value.
    pub fn set(&self, image: impl Into<String>) { self.inner.set(image.into()); }

    /// Re-reads the sync file after it changed on disk.
    ///
    /// Called by the background watch; hosts that disabled watching call it
    /// themselves. Never writes the file.
    pub fn handle_file_change(&self) { self.inner.handle_file_change(); }

    /// Registers a callback invoked with the new value after every change.
    pub fn on_change<F>(&self, listener: F) -> Subscription
    where F: Fn(&str) + Send + Sync + 'static {
        self.inner.listeners.add(listener)
    }

    /// Returns a stream of value updates.
    ///
    /// Intermediate values may be skipped by a slow subscriber; use
    /// [`on_change`](Self::on_change) to observe every change.
    #[must_use]
    pub fn subscribe(&self) -> Subscriber<String> { self.inner.value.subscribe() }

    /// Path of the backing sync file.
    #[must_use]
    pub fn sync_file_path(&self) -> &Path { &self.inner.path }

    /// Whether the sync file is currently being watched.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.inner.watch.lock().as_ref().is_some_and(SyncWatch::is_armed)
    }
}

impl std::fmt::Debug for SyncValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncValue")
            .field("path", &self.inner.path)
            .field("value", &self.inner.value.get())
            .finish_non_exhaustive()
    }
}

impl Inner {
    fn start_watching(inner: &Arc<Self>) {
        let (tx, rx) = channel();

        let mut watch = match SyncWatch::new(&inner.path, tx) {
            Ok(watch) => watch,
            Err(err) => {
                tracing::warn!(error = %err, "failed to create sync file watcher");
                return;
            }
        };

        if let Err(err) = watch.arm() {
            tracing::debug!(
                error = %err,
                path = %inner.path.display(),
                "file watcher will activate once the cache directory exists"
            );
        }
        *inner.watch.lock() = Some(watch);

        let weak = Arc::downgrade(inner);
        spawn_named_thread("watch", move || Self::run_event_loop(&weak, &rx));
    }

    /// Forwards watch events until the watcher is dropped.
    fn run_event_loop(weak: &Weak<Self>, rx: &Receiver<notify::Result<Event>>) {
        while let Ok(result) = rx.recv() {
            let Some(inner) = weak.upgrade() else {
                break;
            };

            match result {
                Ok(event) => inner.on_event(&event),
                Err(err) => tracing::warn!(error = %err, "sync file watch error"),
            }
        }
    }

    fn on_event(&self, event: &Event) {
        let affects_file = self.watch.lock().as_mut().is_some_and(|watch| {
            watch.observe(event);
            watch.affects_sync_file(event)
        });

        if affects_file {
            self.handle_file_change();
        } else {
            self.ensure_watch();
        }
    }

    /// Initial read. Nobody can be listening yet, so no notification is sent.
    fn seed(&self) {
        let _guard = self.change_lock.lock();
        if let Some(image) = self.read() {
            self.value.set(image);
        }
    }

    fn set(&self, image: String) {
        let _notify = self.notify_lock.lock();
        {
            let _guard = self.change_lock.lock();
            if self.value.get() == image {
                return;
            }

            self.value.set(image.clone());
            if let Err(err) = write_value(&self.path, &image) {
                tracing::warn!(error = %err, "failed to persist current image");
            }
        }

        self.ensure_watch();
        self.listeners.emit(&image);
    }

    fn handle_file_change(&self) {
        let _notify = self.notify_lock.lock();
        let changed = {
            let _guard = self.change_lock.lock();
            match self.read() {
                Some(image) if self.value.get() != image => {
                    self.value.set(image.clone());
                    Some(image)
                }
                _ => None,
            }
        };

        self.ensure_watch();

        if let Some(image) = changed {
            tracing::debug!(image = %image, "current image changed externally");
            self.listeners.emit(&image);
        }
    }

    fn read(&self) -> Option<String> {
        read_value(&self.path).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to read sync file");
            None
        })
    }

    fn ensure_watch(&self) {
        if let Some(watch) = self.watch.lock().as_mut() {
            watch.ensure_armed();
        }
    }
}
