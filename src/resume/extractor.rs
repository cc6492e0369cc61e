//! Text extraction from resume documents.
//!
//! Decoders are pluggable [`ExtractionStrategy`] values tried in order. A
//! strategy that fails or produces only whitespace hands over to the next;
//! the first non-blank text wins. Only a plain-text strategy ships here, so
//! PDF and DOCX files need a caller-supplied decoder.

use std::sync::Arc;

use log::{debug, warn};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::error::{HireHubError, Result};
use crate::resume::source::{DocumentKind, DocumentSource};

/// A document decoder.
pub trait ExtractionStrategy: Send + Sync {
    /// Get the name of this strategy (for logs).
    fn name(&self) -> &'static str;

    /// Whether this strategy can decode documents of `kind`.
    fn supports(&self, kind: DocumentKind) -> bool;

    /// Decode the document bytes into text.
    fn extract(&self, bytes: &[u8]) -> anyhow::Result<String>;
}

/// Reads the bytes as UTF-8, replacing invalid sequences.
///
/// Only claims text files. DOCX and PDF are binary containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextStrategy;

impl ExtractionStrategy for PlainTextStrategy {
    fn name(&self) -> &'static str {
        "plain_text"
    }

    fn supports(&self, kind: DocumentKind) -> bool {
        kind == DocumentKind::Text
    }

    fn extract(&self, bytes: &[u8]) -> anyhow::Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Ordered chain of extraction strategies.
#[derive(Clone)]
pub struct TextExtractor {
    strategies: Vec<Arc<dyn ExtractionStrategy>>,
    control: PatternReplaceCharFilter,
    non_ascii: PatternReplaceCharFilter,
}

impl TextExtractor {
    /// An extractor with no strategies.
    pub fn empty() -> Result<Self> {
        Ok(TextExtractor {
            strategies: Vec::new(),
            control: PatternReplaceCharFilter::new(r"[\r\n\t]+", " ")?,
            non_ascii: PatternReplaceCharFilter::new(r"[^\x00-\x7F]+", " ")?,
        })
    }

    /// An extractor with the built-in plain-text strategy.
    pub fn new() -> Result<Self> {
        Ok(Self::empty()?.add_strategy(Arc::new(PlainTextStrategy)))
    }

    /// Insert a strategy ahead of the existing ones.
    pub fn prepend_strategy(mut self, strategy: Arc<dyn ExtractionStrategy>) -> Self {
        self.strategies.insert(0, strategy);
        self
    }

    /// Append a strategy to the chain.
    pub fn add_strategy(mut self, strategy: Arc<dyn ExtractionStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn strategies(&self) -> &[Arc<dyn ExtractionStrategy>] {
        &self.strategies
    }

    /// Extract cleaned text from a document.
    ///
    /// Returns an empty string when every supporting strategy came up empty,
    /// and an extraction error when no strategy supports the document kind.
    pub fn extract(&self, source: &DocumentSource) -> Result<String> {
        let kind = source.kind();
        let candidates: Vec<_> = self
            .strategies
            .iter()
            .filter(|s| s.supports(kind))
            .collect();

        if candidates.is_empty() {
            return Err(HireHubError::extraction(format!(
                "no decoder registered for {kind:?} document {}",
                source.name()
            )));
        }

        let bytes = source.read_bytes()?;
        for strategy in candidates {
            match strategy.extract(&bytes) {
                Ok(text) if !text.trim().is_empty() => {
                    debug!("{} extracted {} bytes of text", strategy.name(), text.len());
                    return Ok(self.clean(&text));
                }
                Ok(_) => debug!("{} produced no text for {}", strategy.name(), source.name()),
                Err(e) => warn!("{} failed on {}: {e:#}", strategy.name(), source.name()),
            }
        }

        warn!("No text could be extracted from {}", source.name());
        Ok(String::new())
    }

    /// Collapse control-character and non-ASCII runs into single spaces.
    pub fn clean(&self, text: &str) -> String {
        let text = self.control.filter(text);
        self.non_ascii.filter(&text).trim().to_string()
    }
}

impl std::fmt::Debug for TextExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextExtractor")
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
