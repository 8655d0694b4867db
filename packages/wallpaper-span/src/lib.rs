//! wallpaper-span - keep the current wallpaper in sync across screens.
//!
//! Each screen of a spanning wallpaper plugin owns a [`SyncValue`]. The value
//! is mirrored to a small file in the user cache directory and every instance
//! watches that file, so when one screen advances to the next image, the
//! others follow.
//!
//! ```no_run
//! use wallpaper_span::SyncValue;
//!
//! let value = SyncValue::new();
//! let _subscription = value.on_change(|image| println!("now showing {image}"));
//! value.set("/walls/next.jpg");
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod registration;
pub mod sync;

mod thread;

pub use config::SyncConfig;
pub use error::{SpanError, SyncError};
pub use registration::Registration;
pub use sync::{Subscription, SyncValue};
