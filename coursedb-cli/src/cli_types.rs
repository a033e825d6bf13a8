//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "coursedb")]
#[command(about = "Read the course catalog out of a course store", long_about = None)]
pub(crate) struct Cli {
    /// Path to the course store (overrides COURSEDB_STORE and settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print every course with its modules and clips
    List {
        /// Emit the catalog as JSON instead of a tree
        #[arg(long)]
        json: bool,

        /// Stop at modules; don't print clips
        #[arg(long)]
        modules_only: bool,
    },

    /// Print the number of clips in the store
    Count,

    /// Check that the store has the expected tables
    Check,

    /// Manage coursedb settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved store path
    Show,

    /// Print the settings file path
    Path,

    /// Remember a store path in settings.toml
    SetStore {
        /// Path to the course store
        path: PathBuf,
    },

    /// Forget the store path saved in settings.toml
    ClearStore,
}
