//! Command-line interface definitions and per-command modules.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub mod checkin;
pub mod checkout;
pub mod completions;
pub mod info;
pub mod list;
pub mod update;
pub mod utils;

/// Command-line interface for ferry.
#[derive(Parser)]
#[command(
    name = "ferry",
    version,
    about = "Checkout and checkin round-trips for GitHub-hosted content"
)]
pub struct Cli {
    /// Suppress progress output (errors and essential output still print)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a file and its revision marker from the repository
    #[command(visible_alias = "co")]
    Checkout {
        /// Remote path of the file to fetch
        file: String,

        /// Branch to fetch from (defaults to the repository default branch)
        #[arg(short, long)]
        branch: Option<String>,

        /// Local path to write (defaults to the remote file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Commit local edits back, conditioned on the checked-out revision
    #[command(visible_alias = "ci")]
    Checkin {
        /// Local file to check in (sidecar metadata must sit next to it)
        file: PathBuf,

        /// Commit message (defaults to "Update <remote path>")
        #[arg(short, long)]
        message: Option<String>,

        /// Branch to commit to (defaults to the checked-out branch)
        #[arg(short, long)]
        branch: Option<String>,
    },

    /// Fetch a file, apply edits in memory, and check it back in
    #[command(visible_alias = "up")]
    Update {
        /// Remote path of the file to update
        file: String,

        /// Branch to update (defaults to the repository default branch)
        #[arg(short, long)]
        branch: Option<String>,

        /// Commit message (defaults to "Update <remote path>")
        #[arg(short, long)]
        message: Option<String>,

        /// Text to find (all occurrences are replaced)
        #[arg(long, requires = "replace")]
        find: Option<String>,

        /// Replacement text for --find matches
        #[arg(long, requires = "find")]
        replace: Option<String>,

        /// Text appended to the end of the file
        #[arg(long)]
        append: Option<String>,

        /// Text prepended to the start of the file
        #[arg(long)]
        prepend: Option<String>,
    },

    /// List files in a repository directory
    #[command(visible_alias = "ls")]
    List {
        /// Directory to list (defaults to the repository root)
        directory: Option<String>,

        /// Branch to list from (defaults to the repository default branch)
        #[arg(short, long)]
        branch: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show repository metadata
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
