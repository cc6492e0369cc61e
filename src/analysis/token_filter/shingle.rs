//! Shingle filter: word n-grams.
//!
//! Emits every run of `min_size..=max_size` consecutive tokens joined by a
//! single space. Stopped tokens are dropped first, so n-grams span the gap a
//! removed stop word leaves behind.
//!
//! # Examples
//!
//! ```
//! use hirehub::analysis::token_filter::Filter;
//! use hirehub::analysis::token_filter::shingle::ShingleFilter;
//! use hirehub::analysis::token::Token;
//!
//! let filter = ShingleFilter::new(1, 2).unwrap();
//! let tokens = vec![Token::new("machine", 0), Token::new("learning", 1)];
//! let texts: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(texts, vec!["machine", "learning", "machine learning"]);
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{HireHubError, Result};

/// A filter that replaces the stream with its word n-grams.
#[derive(Clone, Debug)]
pub struct ShingleFilter {
    min_size: usize,
    max_size: usize,
}

impl ShingleFilter {
    /// Create a shingle filter emitting n-grams of `min_size..=max_size` tokens.
    pub fn new(min_size: usize, max_size: usize) -> Result<Self> {
        if min_size == 0 || min_size > max_size {
            return Err(HireHubError::analysis(format!(
                "Invalid n-gram range ({min_size}, {max_size})"
            )));
        }
        Ok(ShingleFilter { min_size, max_size })
    }

    /// Smallest n-gram size.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Largest n-gram size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Filter for ShingleFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words: Vec<Token> = tokens.filter(|t| !t.is_stopped()).collect();
        let mut shingles = Vec::new();
        let mut position = 0;

        for size in self.min_size..=self.max_size {
            if size > words.len() {
                break;
            }
            for window in words.windows(size) {
                let text = window
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let first = &window[0];
                let last = &window[size - 1];
                shingles.push(Token::with_offsets(
                    text,
                    position,
                    first.start_offset,
                    last.end_offset,
                ));
                position += 1;
            }
        }

        Ok(Box::new(shingles.into_iter()))
    }

    fn name(&self) -> &'static str {
        "shingle"
    }
}
