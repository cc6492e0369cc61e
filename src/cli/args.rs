//! Command line argument parsing for the HireHub CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::ranker::DEFAULT_TOP_N;

/// HireHub - rank job postings against a search phrase or a resume
#[derive(Parser, Debug, Clone)]
#[command(name = "hirehub")]
#[command(about = "Rank job postings against a search phrase or a resume")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HireHubArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Index configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "HIREHUB_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HireHubArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank the catalog against a search phrase
    Search(SearchArgs),

    /// Rank the catalog against the skills found in a resume
    Resume(ResumeArgs),

    /// Show index statistics
    Stats(StatsArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Catalog file (.csv or .jsonl)
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Search phrase
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Only postings whose location contains this text
    #[arg(short, long)]
    pub location: Option<String>,

    /// Only postings whose experience level contains this text
    #[arg(short, long)]
    pub experience: Option<String>,

    /// Maximum number of results to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub limit: usize,
}

/// Arguments for resume ranking
#[derive(Parser, Debug, Clone)]
pub struct ResumeArgs {
    /// Catalog file (.csv or .jsonl)
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Resume document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Maximum number of results to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub limit: usize,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Catalog file (.csv or .jsonl)
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
