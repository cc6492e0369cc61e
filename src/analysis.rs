//! Text analysis: tokenization, token filters, char filters and analyzers.
//!
//! The same [`analyzer::catalog::CatalogAnalyzer`] turns both catalog text
//! and queries into terms, so both land in one vector space.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
