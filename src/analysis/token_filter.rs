//! Token filter implementations for token transformation.
//!
//! Filters receive the tokenizer's stream and rewrite it. The catalog
//! pipeline chains them as:
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Shingle (1..=3) → Vectorizer
//! ```
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//! - [`shingle::ShingleFilter`] - Emits word n-grams

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod lowercase;
pub mod shingle;
pub mod stop;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}
