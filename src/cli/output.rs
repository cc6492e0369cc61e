//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{HireHubArgs, OutputFormat};
use crate::error::Result;
use crate::index::IndexStats;
use crate::ranker::RankedResult;
use crate::resume::ResumeRecommendation;

/// Result structure for search operations.
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub query: String,
    pub results: Vec<RankedResult>,
    pub duration_ms: u64,
}

/// Values that have a human-readable rendering.
pub trait HumanOutput {
    fn print_human(&self);
}

/// Output a result in the selected format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &HireHubArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &HireHubArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn print_results(results: &[RankedResult]) {
    if results.is_empty() {
        println!("No results.");
        return;
    }

    for (i, result) in results.iter().enumerate() {
        println!();
        println!("{}. {} ({:.1}% match)", i + 1, result.title, result.match_score);
        println!("─────────────");
        if !result.company_name.is_empty() {
            println!("Company: {}", result.company_name);
        }
        if !result.location.is_empty() {
            println!("Location: {}", result.location);
        }
        if !result.experience_level.is_empty() {
            println!("Experience: {}", result.experience_level);
        }
        if !result.job_url.is_empty() {
            println!("URL: {}", result.job_url);
        }
        if !result.description.is_empty() {
            println!("{}", truncate(&result.description, 200));
        }
    }
    println!();
}

impl HumanOutput for SearchOutput {
    fn print_human(&self) {
        println!("Search Results for {:?}:", self.query);
        println!("═══════════════");
        print_results(&self.results);
        println!("Search time: {}ms", self.duration_ms);
    }
}

impl HumanOutput for ResumeRecommendation {
    fn print_human(&self) {
        if self.skills.is_empty() {
            println!("Detected skills: none (ranking with the resume text)");
        } else {
            println!("Detected skills: {}", self.skills.join(", "));
        }
        println!("Recommended jobs:");
        println!("═══════════════");
        print_results(&self.results);
    }
}

impl HumanOutput for IndexStats {
    fn print_human(&self) {
        println!("Index Statistics:");
        println!("════════════════");
        println!("Postings: {}", self.postings);
        println!("Vocabulary size: {}", self.vocabulary_size);
        println!("Non-zero entries: {}", self.non_zero_entries);
        println!(
            "Postings with applications: {}",
            self.postings_with_applications
        );
        println!("Max applications: {}", self.max_applications);
        println!("Mean popularity: {:.3}", self.mean_popularity);
    }
}

/// Truncate to at most `max_chars` characters, adding an ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}
