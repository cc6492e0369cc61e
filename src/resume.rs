//! Resume-driven recommendations.
//!
//! ```text
//! DocumentSource → TextExtractor → SkillExtractor → query → rank
//! ```
//!
//! The ranker never learns whether it got raw resume text or a keyword list.

pub mod extractor;
pub mod skills;
pub mod source;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::state::IndexState;
use crate::ranker::{RankFilters, RankedResult, rank};

pub use extractor::{ExtractionStrategy, PlainTextStrategy, TextExtractor};
pub use skills::{KeywordSkillExtractor, SkillExtractor, resume_query};
pub use source::{DocumentKind, DocumentSource};

/// Outcome of ranking a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecommendation {
    /// Skills detected in the resume.
    pub skills: Vec<String>,
    /// The query the catalog was ranked with.
    pub query: String,
    pub results: Vec<RankedResult>,
}

/// Extract, reduce to skills and rank a resume. No filters are applied.
pub fn recommend_for_resume(
    index: &IndexState,
    extractor: &TextExtractor,
    skill_extractor: &dyn SkillExtractor,
    source: &DocumentSource,
    top_n: usize,
) -> Result<ResumeRecommendation> {
    let text = extractor.extract(source)?;
    let skills = skill_extractor.extract(&text);
    let query = resume_query(&text, &skills);
    info!(
        "Resume {}: {} skills detected",
        source.name(),
        skills.len()
    );

    let results = rank(index, &query, top_n, &RankFilters::default());
    Ok(ResumeRecommendation {
        skills,
        query,
        results,
    })
}
