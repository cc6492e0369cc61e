//! Command implementations for the HireHub CLI.

use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::catalog::load_catalog;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::index::{IndexConfig, IndexState, build};
use crate::ranker::{RankFilters, rank};
use crate::resume::{DocumentSource, KeywordSkillExtractor, TextExtractor, recommend_for_resume};

/// Execute a CLI command.
pub fn execute_command(args: HireHubArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search(search_args, &args),
        Command::Resume(resume_args) => resume(resume_args, &args),
        Command::Stats(stats_args) => stats(stats_args, &args),
    }
}

/// Load the configuration and catalog, then build the index.
fn open_index(catalog: &Path, cli_args: &HireHubArgs) -> Result<IndexState> {
    let config = match &cli_args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            IndexConfig::from_file(path)?
        }
        None => IndexConfig::default(),
    };

    let start = Instant::now();
    let postings = load_catalog(catalog)?;
    let index = build(postings, &config)?;
    info!("Index ready in {}ms", start.elapsed().as_millis());
    Ok(index)
}

fn search(args: &SearchArgs, cli_args: &HireHubArgs) -> Result<()> {
    let index = open_index(&args.catalog, cli_args)?;

    let filters = RankFilters {
        location: args.location.clone(),
        experience_level: args.experience.clone(),
    };

    let start = Instant::now();
    let results = rank(&index, &args.query, args.limit, &filters);
    let duration_ms = start.elapsed().as_millis() as u64;

    output_result(
        &SearchOutput {
            query: args.query.clone(),
            results,
            duration_ms,
        },
        cli_args,
    )
}

fn resume(args: &ResumeArgs, cli_args: &HireHubArgs) -> Result<()> {
    let index = open_index(&args.catalog, cli_args)?;
    let extractor = TextExtractor::new()?;
    let skills = KeywordSkillExtractor::new()?;
    let source = DocumentSource::from_path(&args.file);

    let recommendation = recommend_for_resume(&index, &extractor, &skills, &source, args.limit)?;
    output_result(&recommendation, cli_args)
}

fn stats(args: &StatsArgs, cli_args: &HireHubArgs) -> Result<()> {
    let index = open_index(&args.catalog, cli_args)?;
    output_result(&index.stats(), cli_args)
}
