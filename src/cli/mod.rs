//! Command Line Interface for HireHub.

pub mod args;
pub mod commands;
pub mod logging;
pub mod output;

pub use args::*;
pub use commands::*;
pub use output::*;
