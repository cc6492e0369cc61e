//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw string before it reaches the tokenizer. The
//! catalog uses them to strip punctuation from posting text and the resume
//! pipeline uses them to collapse control characters and non-ASCII runs.
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement

pub mod pattern_replace;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}
