//! Episode domain model

use crate::types::{Duration, Validator};
use serde::{Deserialize, Serialize};

/// Unique identifier for an episode
///
/// Ids are the human-readable slugs the catalog publishes; the playback core
/// never inspects them, the surrounding app uses them for routing and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(String);

impl EpisodeId {
    /// Creates an episode id from a catalog slug
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EpisodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A playable podcast episode
///
/// Value type owned by the caller; the playback store only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: EpisodeId,
    pub title: String,
    /// People featured on the episode, as a display string
    pub members: String,
    /// Cover image URL or path
    pub thumbnail: String,
    pub duration: Duration,
    /// Playable media URL
    pub url: String,
}

impl Episode {
    /// Creates a new episode
    pub fn new(
        id: EpisodeId,
        title: String,
        members: String,
        thumbnail: String,
        duration: Duration,
        url: String,
    ) -> Self {
        Self {
            id,
            title,
            members,
            thumbnail,
            duration,
            url,
        }
    }
}

impl Validator for Episode {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.id.as_str().trim().is_empty() {
            errors.push("Episode id cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            errors.push("Episode title cannot be empty".to_string());
        }

        if self.url.trim().is_empty() {
            errors.push("Episode media URL cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_episode() -> Episode {
        Episode::new(
            EpisodeId::from("a-banda-toca"),
            "A banda toca".to_string(),
            "Diego e Richard".to_string(),
            "https://example.com/thumb.jpg".to_string(),
            Duration::from_seconds(3981),
            "https://example.com/audio.mp3".to_string(),
        )
    }

    #[test]
    fn test_episode_id_display() {
        let id = EpisodeId::new("some-slug");
        assert_eq!(id.to_string(), "some-slug");
        assert_eq!(id.as_str(), "some-slug");
    }

    #[test]
    fn test_episode_validation_success() {
        assert!(sample_episode().is_valid());
    }

    #[test]
    fn test_episode_validation_empty_title() {
        let mut episode = sample_episode();
        episode.title = "   ".to_string();
        assert!(!episode.is_valid());
    }

    #[test]
    fn test_episode_validation_missing_url() {
        let mut episode = sample_episode();
        episode.url = String::new();
        let errors = episode.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("URL"));
    }

    #[test]
    fn test_episode_validation_collects_all_errors() {
        let mut episode = sample_episode();
        episode.title = String::new();
        episode.url = String::new();
        let errors = episode.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_episode_serde_roundtrip() {
        let episode = sample_episode();
        let json = serde_json::to_string(&episode).unwrap();
        let parsed: Episode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, episode);
    }
}
