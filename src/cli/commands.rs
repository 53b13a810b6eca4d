//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Solidafy Paginator CLI
#[allow(missing_docs)]
#[derive(Parser, Debug)]
#[command(name = "solidafy-paginator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Records per page, 0 for the default (overrides the source definition)
    #[arg(short = 'n', long, global = true)]
    pub page_size: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[allow(missing_docs)]
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of records
    Page {
        #[command(flatten)]
        input: InputArgs,

        /// Page to show (values below 1 show the first page)
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        page: i64,
    },

    /// Print page navigation info without fetching records
    Info {
        #[command(flatten)]
        input: InputArgs,

        /// Page to describe (values below 1 describe the first page)
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        page: i64,
    },

    /// Validate a database source definition
    Validate {
        /// Source definition file (YAML)
        #[arg(short, long)]
        source: PathBuf,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Page { .. } => "page",
            Commands::Info { .. } => "info",
            Commands::Validate { .. } => "validate",
        }
    }
}

/// Where records come from
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// JSON file holding an array of records
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Database source definition file (YAML)
    #[arg(short, long)]
    pub source: Option<PathBuf>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
