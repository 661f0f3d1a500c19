//! Episode source trait

use crate::{CatalogResult, EpisodeRecord};

/// A provider of episode records
///
/// May be a bundled dataset or a remote API; consumers stay agnostic.
pub trait EpisodeSource: Send + Sync {
    /// All records, in the source's publication order
    fn fetch_all(&self) -> CatalogResult<Vec<EpisodeRecord>>;

    /// Looks up a single record by id
    fn find(&self, id: &str) -> CatalogResult<EpisodeRecord>;

    /// Get metadata about the source
    fn metadata(&self) -> SourceMetadata;

    /// Check if source is available
    fn is_available(&self) -> bool;
}

/// Source metadata
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub description: String,
    pub base_url: String,
    pub requires_auth: bool,
}
