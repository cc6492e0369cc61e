//! Query ranking against an [`IndexState`].
//!
//! A query is lowercased and projected into the frozen vector space. Every
//! posting is scored by
//!
//! ```text
//! hybrid = 0.7 * cosine(query, posting) + 0.3 * popularity
//! ```
//!
//! and postings are walked in hybrid order (ties by catalog position),
//! skipping those rejected by a filter, until `top_n` are accepted. The
//! displayed match score is the similarity relative to the best similarity
//! in the catalog, so popularity changes the order but not the percentage.
//!
//! When nothing is accepted the result falls back to the most popular
//! postings with a match score of 0. Ranking never fails.

use std::cmp::Ordering;

use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::posting::JobPosting;
use crate::index::state::IndexState;
use crate::vector_space::SparseVector;

/// Weight of textual similarity in the hybrid score.
pub const CONTENT_WEIGHT: f64 = 0.7;

/// Weight of popularity in the hybrid score.
pub const POPULARITY_WEIGHT: f64 = 0.3;

/// Floor for the best similarity when scaling match scores.
pub const SIMILARITY_EPSILON: f64 = 1e-6;

/// Result count used by the search box and the resume pipeline.
pub const DEFAULT_TOP_N: usize = 10;

/// Optional categorical filters.
///
/// A filter matches when its value, as given, is a case-insensitive
/// substring of the posting's field. Blank filter values are inactive and
/// postings with an empty field are not filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankFilters {
    pub location: Option<String>,
    pub experience_level: Option<String>,
}

impl RankFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn experience_level<S: Into<String>>(mut self, level: S) -> Self {
        self.experience_level = Some(level.into());
        self
    }

    /// Whether any filter is active.
    pub fn is_active(&self) -> bool {
        active(&self.location).is_some() || active(&self.experience_level).is_some()
    }

    /// Whether a posting passes every active filter.
    pub fn accepts(&self, posting: &JobPosting) -> bool {
        field_matches(&self.location, &posting.location)
            && field_matches(&self.experience_level, &posting.experience_level)
    }
}

// Whitespace only decides blankness; the needle keeps its padding.
fn active(filter: &Option<String>) -> Option<String> {
    filter
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_lowercase)
}

fn field_matches(filter: &Option<String>, field: &str) -> bool {
    match active(filter) {
        Some(needle) if !field.is_empty() => field.to_lowercase().contains(&needle),
        _ => true,
    }
}

/// A ranked posting as shown to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub experience_level: String,
    pub description: String,
    pub job_url: String,
    /// Similarity relative to the best match, 0 to 100, one decimal.
    pub match_score: f64,
}

impl RankedResult {
    fn from_posting(posting: &JobPosting, match_score: f64) -> Self {
        RankedResult {
            id: posting.id.clone(),
            title: posting.title.clone(),
            company_name: posting.company_name.clone(),
            location: posting.location.clone(),
            experience_level: posting.experience_level.clone(),
            description: posting.description.clone(),
            job_url: posting.job_url.clone(),
            match_score,
        }
    }
}

/// Rank the catalog for `query`.
///
/// Returns at most `top_n` results. A blank query (or `top_n == 0`) yields
/// an empty list without falling back.
pub fn rank(
    index: &IndexState,
    query: &str,
    top_n: usize,
    filters: &RankFilters,
) -> Vec<RankedResult> {
    if query.trim().is_empty() || top_n == 0 {
        return Vec::new();
    }

    let similarities = similarity_scores(index, query);
    let popularity = index.popularity();

    let hybrid: Vec<f64> = similarities
        .iter()
        .zip(popularity)
        .map(|(sim, pop)| CONTENT_WEIGHT * sim + POPULARITY_WEIGHT * pop)
        .collect();

    let max_similarity = similarities.iter().copied().fold(0.0, f64::max);
    let scale = if max_similarity > 0.0 {
        max_similarity
    } else {
        SIMILARITY_EPSILON
    };

    let mut results = Vec::with_capacity(top_n.min(index.len()));
    for row in descending_order(&hybrid) {
        let posting = &index.postings()[row];
        if !filters.accepts(posting) {
            continue;
        }
        let match_score = round_one_decimal(100.0 * similarities[row] / scale).clamp(0.0, 100.0);
        results.push(RankedResult::from_posting(posting, match_score));
        if results.len() >= top_n {
            break;
        }
    }

    debug!(
        "Query {query:?}: max similarity {max_similarity:.4}, {} results",
        results.len()
    );

    if results.is_empty() {
        warn!("No posting matched {query:?} under the active filters; returning popular postings");
        return popularity_fallback(index, top_n);
    }

    results
}

/// Cosine similarity of the lowercased query against every catalog row.
pub fn similarity_scores(index: &IndexState, query: &str) -> Vec<f64> {
    let query_vector = match index.vectorizer().transform(&query.to_lowercase()) {
        Ok(vector) => vector,
        Err(e) => {
            warn!("Could not analyze query {query:?}: {e}");
            SparseVector::default()
        }
    };

    if query_vector.is_zero() {
        return vec![0.0; index.len()];
    }

    index
        .matrix()
        .par_iter()
        .map(|row| row.cosine(&query_vector))
        .collect()
}

/// The `top_n` most popular postings with a match score of 0.
///
/// Filters are not applied here.
pub fn popularity_fallback(index: &IndexState, top_n: usize) -> Vec<RankedResult> {
    descending_order(index.popularity())
        .into_iter()
        .take(top_n)
        .map(|row| RankedResult::from_posting(&index.postings()[row], 0.0))
        .collect()
}

/// Row indices sorted by score descending; equal scores keep row order.
fn descending_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });
    order
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{IndexConfig, build};

    fn index(postings: Vec<JobPosting>) -> IndexState {
        build(postings, &IndexConfig::default()).unwrap()
    }

    #[test]
    fn test_descending_order_is_stable() {
        assert_eq!(descending_order(&[0.5, 0.9, 0.5, 0.9]), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(66.666), 66.7);
        assert_eq!(round_one_decimal(100.0), 100.0);
    }

    #[test]
    fn test_filter_matching() {
        let posting = JobPosting::new("Engineer")
            .with_location("Berlin, Germany")
            .with_experience("Mid-Senior level");

        assert!(RankFilters::new().location("berlin").accepts(&posting));
        assert!(RankFilters::new().location("  ").accepts(&posting));
        assert!(!RankFilters::new().location("Munich").accepts(&posting));
        assert!(RankFilters::new().experience_level("SENIOR").accepts(&posting));

        let no_location = JobPosting::new("Engineer");
        assert!(RankFilters::new().location("Munich").accepts(&no_location));
        assert!(!RankFilters::new().is_active());
        assert!(RankFilters::new().location("x").is_active());
    }

    #[test]
    fn test_blank_query() {
        let index = index(vec![JobPosting::new("Rust Engineer")]);
        assert!(rank(&index, "", 5, &RankFilters::default()).is_empty());
        assert!(rank(&index, "   \t", 5, &RankFilters::default()).is_empty());
        assert!(rank(&index, "rust", 0, &RankFilters::default()).is_empty());
    }

    #[test]
    fn test_query_is_lowercased() {
        let index = index(vec![
            JobPosting::new("Rust Engineer"),
            JobPosting::new("Data Analyst"),
        ]);
        let results = rank(&index, "RUST", 1, &RankFilters::default());
        assert_eq!(results[0].title, "Rust Engineer");
        assert_eq!(results[0].match_score, 100.0);
    }

    #[test]
    fn test_popularity_breaks_similarity_ties() {
        let index = index(vec![
            JobPosting::new("Rust Engineer Berlin office"),
            JobPosting::new("Rust Engineer Munich office").with_applications(40),
        ]);
        let results = rank(&index, "rust engineer", 2, &RankFilters::default());
        assert_eq!(results[0].title, "Rust Engineer Munich office");
        assert_eq!(results[0].match_score, results[1].match_score);
    }

    #[test]
    fn test_filter_keeps_padding() {
        let index = index(vec![
            JobPosting::new("Rust Engineer services").with_location("New York"),
            JobPosting::new("Go Engineer services")
                .with_location("Yorkshire")
                .with_applications(25),
        ]);
        let filters = RankFilters::new().location("York ");
        assert!(filters.is_active());

        let results = rank(&index, "engineer", 5, &filters);
        assert_eq!(results, popularity_fallback(&index, 5));
        assert!(results.iter().all(|r| r.match_score == 0.0));

        let padded = JobPosting::new("Engineer").with_location("York Minster");
        assert!(filters.accepts(&padded));
    }

    #[test]
    fn test_whitespace_field_is_filtered() {
        let posting = JobPosting::new("Engineer").with_location("   ");
        assert!(!RankFilters::new().location("Berlin").accepts(&posting));
        assert!(RankFilters::new().accepts(&posting));
    }

    #[test]
    fn test_query_keeps_underscores_and_accents() {
        let index = index(vec![
            JobPosting::new("Rust Engineer"),
            JobPosting::new("Python Developer"),
        ]);

        // One word token each, neither present in the normalized catalog.
        for query in ["RUST_ENGINEER", "rust_engineer", "développeur"] {
            let results = rank(&index, query, 2, &RankFilters::default());
            assert_eq!(results.len(), 2);
            assert!(results.iter().all(|r| r.match_score == 0.0), "{query}");
        }

        let results = rank(&index, "python-developer", 1, &RankFilters::default());
        assert_eq!(results[0].title, "Python Developer");
        assert_eq!(results[0].match_score, 100.0);
    }
}
