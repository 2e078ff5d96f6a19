//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Weighted suitability analysis for polygon vector layers
#[derive(Parser, Debug)]
#[command(name = "polysuit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Workspace directory holding the layer files (default: from config)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive suitability analysis (default)
    Run {
        /// Output dataset name (skips the interactive prompt)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List layer files available in the workspace
    Layers,

    /// Show effective settings
    Info,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
