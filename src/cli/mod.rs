//! Command-line interface definitions.

pub mod args;
pub mod types;

pub use args::{Commands, GetCmd, NflStats};
