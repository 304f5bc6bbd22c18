//! Storage layer for the NFL stats CLI
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Basic CRUD operations
//! - `health`: Database consistency reporting
//!
//! The database is a local mirror of the per-game record store owned by the
//! ingestion side. Records are written by `sync` and read by everything
//! else; nothing here mutates a record once stored except a forced refresh.

pub mod health;
pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use health::HealthReport;
pub use models::*;
pub use schema::PlayerDatabase;
