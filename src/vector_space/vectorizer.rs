//! TF-IDF vectorizer.
//!
//! Fitting learns the vocabulary and the inverse document frequencies from
//! the whole catalog; afterwards the model is frozen and only transforms.
//!
//! Weights follow the smoothed formulation:
//!
//! ```text
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//! w(t, d)   = count(t, d) * idf(t), then the row is L2-normalized
//! ```

use ahash::AHashMap;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::catalog::CatalogAnalyzer;
use crate::error::{HireHubError, Result};
use crate::vector_space::sparse::SparseVector;

/// Stop word handling for the vectorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    English,
    None,
}

/// Vectorizer parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfIdfConfig {
    /// Vocabulary cap; the most frequent terms across the corpus are kept.
    pub max_features: usize,
    /// Smallest and largest word n-gram.
    pub ngram_range: [usize; 2],
    /// Minimum number of documents a term must occur in.
    pub min_df: usize,
    pub stop_words: StopWords,
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        TfIdfConfig {
            max_features: 100_000,
            ngram_range: [1, 3],
            min_df: 1,
            stop_words: StopWords::English,
        }
    }
}

/// A fitted, immutable TF-IDF model.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    config: TfIdfConfig,
    analyzer: CatalogAnalyzer,
    vocabulary: AHashMap<String, u32>,
    terms: Vec<String>,
    idf: Vec<f32>,
}

impl TfIdfVectorizer {
    /// Fit the model on `documents` and return it with the document matrix.
    pub fn fit_transform(
        config: TfIdfConfig,
        documents: &[String],
    ) -> Result<(Self, Vec<SparseVector>)> {
        if config.max_features == 0 {
            return Err(HireHubError::configuration("max_features must be positive"));
        }
        let analyzer = CatalogAnalyzer::new(
            config.ngram_range[0],
            config.ngram_range[1],
            config.stop_words == StopWords::English,
        )?;

        let counts: Vec<AHashMap<String, u32>> = documents
            .par_iter()
            .map(|doc| count_terms(&analyzer, doc))
            .collect::<Result<_>>()?;

        // df and corpus frequency per term
        let mut stats: AHashMap<&str, (usize, u64)> = AHashMap::new();
        for doc in &counts {
            for (term, count) in doc {
                let entry = stats.entry(term.as_str()).or_insert((0, 0));
                entry.0 += 1;
                entry.1 += u64::from(*count);
            }
        }

        let mut retained: Vec<(&str, usize, u64)> = stats
            .into_iter()
            .filter(|(_, (df, _))| *df >= config.min_df)
            .map(|(term, (df, tf))| (term, df, tf))
            .collect();

        if retained.len() > config.max_features {
            retained.sort_unstable_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(b.0)));
            retained.truncate(config.max_features);
        }
        retained.sort_unstable_by(|a, b| a.0.cmp(b.0));

        if retained.is_empty() {
            return Err(HireHubError::configuration(
                "empty vocabulary; the catalog text only contains stop words",
            ));
        }

        let n = documents.len() as f64;
        let mut vocabulary = AHashMap::with_capacity(retained.len());
        let mut terms = Vec::with_capacity(retained.len());
        let mut idf = Vec::with_capacity(retained.len());
        for (column, (term, df, _)) in retained.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), column as u32);
            terms.push(term.to_string());
            idf.push((((1.0 + n) / (1.0 + df as f64)).ln() + 1.0) as f32);
        }

        debug!(
            "Fitted TF-IDF vocabulary of {} terms over {} documents",
            terms.len(),
            documents.len()
        );

        let vectorizer = TfIdfVectorizer {
            config,
            analyzer,
            vocabulary,
            terms,
            idf,
        };

        let matrix = counts
            .par_iter()
            .map(|doc| vectorizer.weigh(doc))
            .collect();

        Ok((vectorizer, matrix))
    }

    /// Project text into the frozen vector space. Out-of-vocabulary terms
    /// are ignored.
    pub fn transform(&self, text: &str) -> Result<SparseVector> {
        let counts = count_terms(&self.analyzer, text)?;
        Ok(self.weigh(&counts))
    }

    fn weigh(&self, counts: &AHashMap<String, u32>) -> SparseVector {
        let pairs = counts
            .iter()
            .filter_map(|(term, count)| {
                self.vocabulary
                    .get(term)
                    .map(|&column| (column, *count as f32 * self.idf[column as usize]))
            })
            .collect();
        let mut vector = SparseVector::from_pairs(pairs);
        vector.l2_normalize();
        vector
    }

    /// Number of vocabulary columns.
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Column of a term, if it is in the vocabulary.
    pub fn column(&self, term: &str) -> Option<u32> {
        self.vocabulary.get(term).copied()
    }

    /// Term of a column.
    pub fn term(&self, column: u32) -> Option<&str> {
        self.terms.get(column as usize).map(String::as_str)
    }

    /// Inverse document frequency of a term.
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.column(term).map(|c| self.idf[c as usize])
    }

    pub fn config(&self) -> &TfIdfConfig {
        &self.config
    }
}

fn count_terms(analyzer: &CatalogAnalyzer, text: &str) -> Result<AHashMap<String, u32>> {
    let mut counts = AHashMap::new();
    for term in analyzer.terms(text)? {
        *counts.entry(term).or_insert(0) += 1;
    }
    Ok(counts)
}
