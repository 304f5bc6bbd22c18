//! Client for the upstream NFL stats API.
//!
//! The feed owns the per-game record store; this module only reads it.
//! Payloads are cached (memory + disk) so repeated lookups do not re-hit
//! the API; see [`cache_records`] for the load-or-fetch entry points.

pub mod cache_records;
pub mod http;
pub mod types;

pub use http::CacheStatus;
pub use types::{FeedPlayer, GameRecord, RawGameRecord, StatLine};
