//! # HireHub
//!
//! Ranks job postings against a search phrase or a resume.
//!
//! The catalog is indexed once into a TF-IDF vector space together with a
//! popularity signal from application counts; each query is projected into
//! that space and ranked by a blend of similarity and popularity.
//!
//! ```
//! use hirehub::catalog::JobPosting;
//! use hirehub::index::{IndexConfig, build};
//! use hirehub::ranker::{RankFilters, rank};
//!
//! let catalog = vec![
//!     JobPosting::new("Rust Engineer").with_applications(12),
//!     JobPosting::new("Data Analyst").with_applications(3),
//! ];
//! let index = build(catalog, &IndexConfig::default()).unwrap();
//!
//! let results = rank(&index, "rust", 5, &RankFilters::default());
//! assert_eq!(results[0].title, "Rust Engineer");
//! assert_eq!(results[0].match_score, 100.0);
//! ```

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod index;
pub mod ranker;
pub mod resume;
pub mod vector_space;

pub mod prelude {
    pub use crate::catalog::JobPosting;
    pub use crate::error::{HireHubError, Result};
    pub use crate::index::{IndexConfig, IndexHandle, IndexState, build};
    pub use crate::ranker::{RankFilters, RankedResult, rank};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
