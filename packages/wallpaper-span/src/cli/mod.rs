//! CLI module for wallpaper-span.
//!
//! The CLI is a standalone host for the synced value: it can read and set the
//! current image shared by every screen, and follow changes made by others.

mod commands;
mod output;

use clap::Parser;
pub use commands::{Cli, Commands};

use crate::error::SpanError;

/// Runs the CLI.
///
/// Parses command-line arguments, installs logging and executes the command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), SpanError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute()
}

/// Installs the log subscriber. `RUST_LOG` wins over `verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "wallpaper_span=debug" } else { "wallpaper_span=warn" };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
