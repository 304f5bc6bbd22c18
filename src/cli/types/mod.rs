//! Type-safe wrappers and enums for NFL statistics data.

pub mod ids;
pub mod position;
pub mod stat;
pub mod time;

pub use ids::PlayerId;
pub use position::Position;
pub use stat::LeaderStat;
pub use time::{Season, Week};
