//! The immutable index built from a catalog.

use log::{info, warn};
use rayon::prelude::*;

use crate::catalog::normalize::TextNormalizer;
use crate::catalog::posting::JobPosting;
use crate::error::{HireHubError, Result};
use crate::index::config::IndexConfig;
use crate::index::popularity::popularity_scores;
use crate::vector_space::{SparseVector, TfIdfVectorizer};

/// Everything ranking needs, built once per catalog.
///
/// Row `i` of every field describes posting `i`. The state is never mutated
/// after [`build`] returns, so it can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct IndexState {
    postings: Vec<JobPosting>,
    normalized: Vec<String>,
    vectorizer: TfIdfVectorizer,
    matrix: Vec<SparseVector>,
    popularity: Vec<f64>,
}

/// Build an [`IndexState`] from a finalized catalog.
///
/// Fails with a configuration error when the catalog is empty, when no
/// posting carries any text, or when nothing survives into the vocabulary.
pub fn build(postings: Vec<JobPosting>, config: &IndexConfig) -> Result<IndexState> {
    if postings.is_empty() {
        return Err(HireHubError::configuration("catalog is empty"));
    }
    if !postings.iter().any(JobPosting::has_text) {
        return Err(HireHubError::configuration(
            "no posting has any text in its title, description or other text columns",
        ));
    }

    let blank = postings.iter().filter(|p| !p.has_text()).count();
    if blank > 0 {
        warn!("{blank} postings have no text; they are indexed with the filler phrase only");
    }

    let normalizer = TextNormalizer::new(config.min_text_length, config.filler_phrase.clone())?;
    let normalized: Vec<String> = postings
        .par_iter()
        .map(|p| normalizer.normalize(p))
        .collect();

    let (vectorizer, matrix) =
        TfIdfVectorizer::fit_transform(config.vectorizer.clone(), &normalized)?;

    let applications: Vec<u64> = postings.iter().map(|p| p.applications_count).collect();
    let popularity = popularity_scores(&applications);

    info!(
        "TF-IDF matrix shape: ({}, {})",
        matrix.len(),
        vectorizer.vocabulary_size()
    );

    Ok(IndexState {
        postings,
        normalized,
        vectorizer,
        matrix,
        popularity,
    })
}

impl IndexState {
    /// Number of postings.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn posting(&self, row: usize) -> Option<&JobPosting> {
        self.postings.get(row)
    }

    /// The normalized text each posting was indexed with.
    pub fn normalized_text(&self, row: usize) -> Option<&str> {
        self.normalized.get(row).map(String::as_str)
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    pub fn matrix(&self) -> &[SparseVector] {
        &self.matrix
    }

    pub fn popularity(&self) -> &[f64] {
        &self.popularity
    }

    /// Summary numbers for diagnostics.
    pub fn stats(&self) -> IndexStats {
        let nnz = self.matrix.iter().map(SparseVector::nnz).sum();
        let with_applications = self
            .postings
            .iter()
            .filter(|p| p.applications_count > 0)
            .count();
        let mean_popularity = if self.popularity.is_empty() {
            0.0
        } else {
            self.popularity.iter().sum::<f64>() / self.popularity.len() as f64
        };

        IndexStats {
            postings: self.len(),
            vocabulary_size: self.vectorizer.vocabulary_size(),
            non_zero_entries: nnz,
            postings_with_applications: with_applications,
            max_applications: self
                .postings
                .iter()
                .map(|p| p.applications_count)
                .max()
                .unwrap_or(0),
            mean_popularity,
        }
    }
}

/// Index statistics.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IndexStats {
    pub postings: usize,
    pub vocabulary_size: usize,
    pub non_zero_entries: usize,
    pub postings_with_applications: usize,
    pub max_applications: u64,
    pub mean_popularity: f64,
}
