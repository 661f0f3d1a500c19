//! Episode records as published by the dataset

use crate::{CatalogError, CatalogResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use podcastr_core::{Duration, Episode, EpisodeId, Validator};
use serde::{Deserialize, Serialize};

/// Media file descriptor attached to an episode record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFileRecord {
    pub url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Media length in whole seconds
    pub duration: u64,
}

/// One episode as it appears in the dataset document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub id: String,
    pub title: String,
    pub members: String,
    /// Publication timestamp, RFC 3339 or `YYYY-MM-DD[ HH:MM:SS]`
    pub published_at: String,
    pub thumbnail: String,
    pub description: String,
    pub file: MediaFileRecord,
}

impl EpisodeRecord {
    /// Parses the publication date
    pub fn published_date(&self) -> CatalogResult<NaiveDate> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.published_at) {
            return Ok(dt.date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(&self.published_at, "%Y-%m-%d %H:%M:%S") {
            return Ok(dt.date());
        }
        if let Ok(d) = NaiveDate::parse_from_str(&self.published_at, "%Y-%m-%d") {
            return Ok(d);
        }

        Err(CatalogError::InvalidDate {
            value: self.published_at.clone(),
        })
    }

    /// Publication date rendered for display, e.g. `8 Jan 21`
    pub fn published_at_display(&self) -> CatalogResult<String> {
        let date = self.published_date()?;
        Ok(date.format("%-d %b %y").to_string())
    }

    /// Converts into the playable domain type, failing fast on records that
    /// would put an unplayable episode into a queue
    pub fn to_episode(&self) -> CatalogResult<Episode> {
        let episode = Episode::new(
            EpisodeId::new(self.id.clone()),
            self.title.clone(),
            self.members.clone(),
            self.thumbnail.clone(),
            Duration::from_seconds(self.file.duration),
            self.file.url.clone(),
        );

        episode
            .validate()
            .map_err(|errors| podcastr_core::AppError::invalid_episode(&self.id, errors))?;

        Ok(episode)
    }
}
