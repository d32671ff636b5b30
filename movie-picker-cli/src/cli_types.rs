//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "movie-picker")]
#[command(about = "Find top movies by genre and release year", long_about = None)]
pub(crate) struct Cli {
    /// Titles CSV (defaults to settings, then ./titles.csv)
    #[arg(long, global = true)]
    pub titles: Option<PathBuf>,

    /// Credits CSV (defaults to settings, then ./credits.csv)
    #[arg(long, global = true)]
    pub credits: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Genre and year-range choices shared by `top` and `browse`.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct SelectionArgs {
    /// Genre to filter by (defaults to the first genre alphabetically)
    #[arg(short, long)]
    pub genre: Option<String>,

    /// First release year to include (clamped to the dataset)
    #[arg(long)]
    pub from: Option<i32>,

    /// Last release year to include (clamped to the dataset)
    #[arg(long)]
    pub to: Option<i32>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List every genre found in the titles source
    Genres,

    /// Show the earliest and latest release year in the titles source
    Years,

    /// Show the top matching titles for a genre and year range
    Top {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Maximum number of titles to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Interactively change genre and year range
    Browse {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Maximum number of titles to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved settings
    Show,

    /// Print the settings file path
    Path,
}
