//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Regenerate table-of-contents home pages for markdown wikis
#[derive(Parser, Debug)]
#[command(name = "wikitoc")]
#[command(about = "Regenerate table-of-contents home pages for markdown wikis")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    pub fn verbose(&self) -> bool {
        matches!(self.command, Command::Write { verbose: true, .. })
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite the home files of a wiki directory
    Write {
        /// The wiki directory
        #[arg(
            short,
            long,
            visible_short_alias = 'l',
            env = "WIKITOC_DIRECTORY",
            default_value = "."
        )]
        directory: PathBuf,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Root home file name
        #[arg(long)]
        home_file: Option<String>,

        /// Root-level folder names to skip (can be repeated)
        #[arg(long)]
        exclude: Vec<String>,

        /// Print the rendered pages instead of writing them
        #[arg(long)]
        dry_run: bool,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show version information
    Version,
}
