//! The job catalog: posting records, loading and text normalization.

pub mod loader;
pub mod normalize;
pub mod posting;

pub use loader::{CatalogFormat, load_catalog};
pub use posting::JobPosting;
