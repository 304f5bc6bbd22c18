//! Core utilities for the NFL stats CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system and in-memory caching of feed responses

pub mod cache;

// Re-export commonly used items for convenience
pub use cache::{try_read_to_string, write_string, CacheKey};
