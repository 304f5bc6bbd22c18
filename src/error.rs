//! Error types for the NFL stats CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stats API URL not provided and {env_var} environment variable not set")]
    MissingApiUrl { env_var: String },

    #[error("Failed to parse numeric value: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Stats API returned no data")]
    NoData,

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for StatsError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        StatsError::Cache {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
