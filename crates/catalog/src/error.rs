use podcastr_core::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Episode not found: {0}")]
    EpisodeNotFound(String),

    #[error("Unrecognized publication date: {value}")]
    InvalidDate { value: String },

    #[error("{0}")]
    Core(#[from] AppError),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
