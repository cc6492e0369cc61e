//! Derivation of the per-posting indexed text.

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::catalog::posting::JobPosting;
use crate::error::Result;

/// Phrase appended to postings whose text is too short to match anything.
pub const DEFAULT_FILLER_PHRASE: &str =
    "data science python analytics machine learning sql dashboard";

/// Postings whose trimmed text is not longer than this get the filler.
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 30;

/// Builds the lowercase, punctuation-free text each posting is indexed by.
#[derive(Clone, Debug)]
pub struct TextNormalizer {
    strip: PatternReplaceCharFilter,
    min_text_length: usize,
    filler_phrase: String,
}

impl TextNormalizer {
    pub fn new<S: Into<String>>(min_text_length: usize, filler_phrase: S) -> Result<Self> {
        Ok(TextNormalizer {
            strip: PatternReplaceCharFilter::new(r"[^a-z0-9\s]", " ")?,
            min_text_length,
            filler_phrase: filler_phrase.into(),
        })
    }

    /// Normalize one posting.
    ///
    /// ```
    /// use hirehub::catalog::normalize::TextNormalizer;
    /// use hirehub::catalog::posting::JobPosting;
    ///
    /// let normalizer = TextNormalizer::default();
    /// let text = normalizer.normalize(&JobPosting::new("C++ Dev"));
    /// assert!(text.starts_with("c   dev"));
    /// assert!(text.ends_with("sql dashboard"));
    /// ```
    pub fn normalize(&self, posting: &JobPosting) -> String {
        let joined = posting.text_fields().join(" ").to_lowercase();
        let mut text = self.strip.filter(&joined);

        if text.trim().chars().count() <= self.min_text_length && !self.filler_phrase.is_empty()
        {
            text.push(' ');
            text.push_str(&self.filler_phrase);
        }
        text
    }

    pub fn min_text_length(&self) -> usize {
        self.min_text_length
    }

    pub fn filler_phrase(&self) -> &str {
        &self.filler_phrase
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TEXT_LENGTH, DEFAULT_FILLER_PHRASE)
            .expect("Default normalization pattern should be valid")
    }
}
