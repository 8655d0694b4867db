//! wallpaper-span - command-line host for the synced wallpaper value.
//!
//! Reads, sets and follows the current image shared by every screen.

fn main() {
    if let Err(err) = wallpaper_span::cli::run() {
        eprintln!("wallpaper-span: {err}");
        std::process::exit(1);
    }
}
