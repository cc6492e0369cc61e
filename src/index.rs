//! The catalog index: built once, read by every ranking request.

pub mod config;
pub mod handle;
pub mod popularity;
pub mod state;

pub use config::IndexConfig;
pub use handle::IndexHandle;
pub use state::{IndexState, IndexStats, build};
