//! Shared domain types for Podcastr

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use types::{Duration, Episode, EpisodeId, Validator};
