//! Bundled JSON dataset source

use crate::{CatalogError, CatalogResult, EpisodeRecord, EpisodeSource, SourceMetadata};
use podcastr_core::Episode;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct Dataset {
    episodes: Vec<EpisodeRecord>,
}

/// Episode catalog backed by a bundled JSON document
///
/// The document is `{"episodes": [...]}`; its order is kept, since it is
/// also the playback order for "play everything".
#[derive(Debug, Clone)]
pub struct BundledCatalog {
    episodes: Vec<EpisodeRecord>,
}

impl BundledCatalog {
    /// Parses a catalog from a JSON document
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        log::info!("Loaded catalog with {} episodes", dataset.episodes.len());
        Ok(Self {
            episodes: dataset.episodes,
        })
    }

    /// Reads and parses a catalog file
    pub fn from_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        log::debug!("Reading catalog from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// All records in publication order
    pub fn episodes(&self) -> &[EpisodeRecord] {
        &self.episodes
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// The `n` most recent records (the dataset lists newest first)
    pub fn latest(&self, n: usize) -> &[EpisodeRecord] {
        &self.episodes[..n.min(self.episodes.len())]
    }

    /// Everything after the `n` most recent records
    pub fn rest(&self, n: usize) -> &[EpisodeRecord] {
        &self.episodes[n.min(self.episodes.len())..]
    }

    /// Looks up a record by id
    pub fn get(&self, id: &str) -> CatalogResult<&EpisodeRecord> {
        self.episodes
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| CatalogError::EpisodeNotFound(id.to_string()))
    }

    /// Converts the whole catalog into a playable queue, document order kept
    pub fn to_queue(&self) -> CatalogResult<Vec<Episode>> {
        self.episodes.iter().map(|r| r.to_episode()).collect()
    }
}

impl EpisodeSource for BundledCatalog {
    fn fetch_all(&self) -> CatalogResult<Vec<EpisodeRecord>> {
        Ok(self.episodes.clone())
    }

    fn find(&self, id: &str) -> CatalogResult<EpisodeRecord> {
        self.get(id).cloned()
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Bundled dataset".to_string(),
            description: format!("Static catalog of {} episodes", self.episodes.len()),
            base_url: String::new(),
            requires_auth: false,
        }
    }

    fn is_available(&self) -> bool {
        true
    }
}
