//! Error types shared across the Podcastr crates
//!
//! Collaborator crates (catalog, player) define their own error enums and
//! convert into `AppError` at the boundary where a caller does not care
//! which subsystem failed.

use thiserror::Error;

/// Main error type for Podcastr
#[derive(Error, Debug)]
pub enum AppError {
    /// Episode failed domain validation
    #[error("Invalid episode '{id}': {reasons}")]
    InvalidEpisode { id: String, reasons: String },

    /// Requested episode does not exist in the catalog
    #[error("Episode not found: {id}")]
    EpisodeNotFound { id: String },

    /// Underlying I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for collaborator-specific failures
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Builds an `InvalidEpisode` from a validation error list
    pub fn invalid_episode(id: &str, errors: Vec<String>) -> Self {
        Self::InvalidEpisode {
            id: id.to_string(),
            reasons: errors.join("; "),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
