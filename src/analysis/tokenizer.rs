//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline: they split the
//! input text into tokens that filters then transform.
//!
//! - [`regex::RegexTokenizer`] - regex-based tokenization; the catalog uses
//!   the `\b\w\w+\b` word pattern

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod regex;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a fitted vector space can be shared
/// across request threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
