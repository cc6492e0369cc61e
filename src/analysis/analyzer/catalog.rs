//! Term analyzer shared by catalog postings and queries.
//!
//! # Pipeline
//!
//! 1. RegexTokenizer (`\b\w\w+\b`)
//! 2. LowercaseFilter
//! 3. StopFilter (English list, optional)
//! 4. ShingleFilter (word n-grams)
//!
//! # Examples
//!
//! ```
//! use hirehub::analysis::analyzer::Analyzer;
//! use hirehub::analysis::analyzer::catalog::CatalogAnalyzer;
//!
//! let analyzer = CatalogAnalyzer::new(1, 2, true).unwrap();
//! let terms: Vec<_> = analyzer.analyze("Experience with Power BI").unwrap().map(|t| t.text).collect();
//!
//! assert_eq!(terms, vec!["experience", "power", "bi", "experience power", "power bi"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::shingle::ShingleFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Analyzer producing the terms of the TF-IDF vector space.
#[derive(Clone, Debug)]
pub struct CatalogAnalyzer {
    inner: PipelineAnalyzer,
}

impl CatalogAnalyzer {
    /// Create an analyzer emitting n-grams of `min_n..=max_n` words.
    pub fn new(min_n: usize, max_n: usize, english_stop_words: bool) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let mut analyzer =
            PipelineAnalyzer::new(tokenizer).add_filter(Arc::new(LowercaseFilter::new()));
        if english_stop_words {
            analyzer = analyzer.add_filter(Arc::new(StopFilter::new()));
        }
        let analyzer = analyzer
            .add_filter(Arc::new(ShingleFilter::new(min_n, max_n)?))
            .with_name("catalog");

        Ok(CatalogAnalyzer { inner: analyzer })
    }

    /// Analyze `text` and collect the term strings.
    pub fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|t| t.text).collect())
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for CatalogAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "catalog"
    }
}
