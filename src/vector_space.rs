//! The TF-IDF vector space shared by catalog rows and queries.

pub mod sparse;
pub mod vectorizer;

pub use sparse::SparseVector;
pub use vectorizer::{StopWords, TfIdfConfig, TfIdfVectorizer};
