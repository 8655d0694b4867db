//! CLI command definitions using Clap.

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

use super::output::print_highlighted_json;
use crate::config::SyncConfig;
use crate::error::SpanError;
use crate::registration::Registration;
use crate::sync::{SyncValue, read_value};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// wallpaper-span CLI - keep the current wallpaper in sync across screens.
#[derive(Parser, Debug)]
#[command(name = "wallpaper-span")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the sync file.
    ///
    /// Defaults to the per-user cache directory.
    #[arg(long, global = true, env = "WALLPAPER_SPAN_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Print the current image shared by all screens.
    Get,

    /// Set the current image for all screens.
    ///
    /// Writes the sync file; every running instance picks the change up.
    #[command(after_long_help = r"Examples:
  wallpaper-span set /path/to/image.jpg")]
    Set {
        /// The image identifier or path.
        #[arg(value_name = "IMAGE")]
        image: String,
    },

    /// Print the current image and every change until interrupted.
    Watch,

    /// Print the path of the sync file.
    Path,

    /// Print how the synced value is exported to hosts, as JSON.
    Info,

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(wallpaper-span completions --shell zsh)"
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid or output cannot be produced.
    pub fn execute(&self) -> Result<(), SpanError> {
        let config = self.config();

        match &self.command {
            Commands::Get => execute_get(config),
            Commands::Set { image } => execute_set(config, image),
            Commands::Watch => execute_watch(config),
            Commands::Path => {
                println!("{}", config.sync_file_path().display());
                Ok(())
            }
            Commands::Info => execute_info(config),
            Commands::Completions { shell } => {
                generate(*shell, &mut Self::command(), "wallpaper-span", &mut io::stdout());
                Ok(())
            }
        }
    }

    /// The sync configuration selected by the global options.
    #[must_use]
    pub fn config(&self) -> SyncConfig {
        self.cache_dir.as_ref().map_or_else(SyncConfig::default, |dir| SyncConfig::new(dir.clone()))
    }
}

fn execute_get(config: SyncConfig) -> Result<(), SpanError> {
    let value = SyncValue::with_config(config.without_watch());
    println!("{}", value.get());
    Ok(())
}

fn execute_set(config: SyncConfig, image: &str) -> Result<(), SpanError> {
    let image = image.trim();
    if image.is_empty() {
        return Err(SpanError::InvalidArguments("Image cannot be empty".to_string()));
    }

    let value = SyncValue::with_config(config.without_watch());
    value.set(image);

    // `set` only logs write failures; the CLI reports them.
    let persisted = read_value(value.sync_file_path())?;
    if persisted.as_deref() != Some(image) {
        return Err(SpanError::SyncError(format!(
            "failed to update {}",
            value.sync_file_path().display()
        )));
    }
    Ok(())
}

fn execute_watch(config: SyncConfig) -> Result<(), SpanError> {
    let value = SyncValue::with_config(config);
    if !value.is_watching() {
        tracing::warn!(
            path = %value.sync_file_path().display(),
            "sync file is not watched yet, changes may be missed"
        );
    }

    let mut subscriber = value.subscribe();
    let current = value.get();
    if !current.is_empty() {
        println!("{current}");
    }

    futures::executor::block_on(async {
        while let Some(image) = subscriber.next().await {
            println!("{image}");
        }
    });

    Ok(())
}

fn execute_info(config: SyncConfig) -> Result<(), SpanError> {
    let registration = Registration::new(config);
    let json = serde_json::to_value(&registration)?;
    print_highlighted_json(&json);
    Ok(())
}
