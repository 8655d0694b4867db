use std::thread;

use crate::constants::THREAD_PREFIX;

/// Spawns a detached thread named `wallpaper-span-{name}`.
///
/// Returns `false` (after logging) if the thread could not be spawned.
pub fn spawn_named_thread<F>(name: &str, task: F) -> bool
where F: FnOnce() + Send + 'static {
    let thread_name = format!("{THREAD_PREFIX}-{name}");

    match thread::Builder::new().name(thread_name.clone()).spawn(task) {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(error = %err, thread = %thread_name, "failed to spawn thread");
            false
        }
    }
}
