//! Index build configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::normalize::{DEFAULT_FILLER_PHRASE, DEFAULT_MIN_TEXT_LENGTH};
use crate::error::Result;
use crate::vector_space::TfIdfConfig;

/// Configuration for [`build`](crate::index::build).
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```
/// use hirehub::index::IndexConfig;
///
/// let config: IndexConfig = serde_json::from_str(r#"{"vectorizer": {"max_features": 500}}"#).unwrap();
/// assert_eq!(config.vectorizer.max_features, 500);
/// assert_eq!(config.vectorizer.ngram_range, [1, 3]);
/// assert_eq!(config.min_text_length, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub vectorizer: TfIdfConfig,
    /// Postings whose normalized text is not longer than this get the filler phrase.
    pub min_text_length: usize,
    pub filler_phrase: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            vectorizer: TfIdfConfig::default(),
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
            filler_phrase: DEFAULT_FILLER_PHRASE.to_string(),
        }
    }
}

impl IndexConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
