use anyhow::{Context, Result};
use console::style;
use podcastr_catalog::{BundledCatalog, EpisodeRecord};
use podcastr_core::Episode;
use podcastr_player::PlayerStore;

fn load_catalog(data_path: &str) -> Result<BundledCatalog> {
    BundledCatalog::from_file(data_path)
        .with_context(|| format!("Failed to load episode dataset from '{}'", data_path))
}

fn print_episode_row(record: &EpisodeRecord) -> Result<()> {
    let episode = record.to_episode().context("Invalid episode record")?;
    let date = record
        .published_at_display()
        .context("Invalid publication date")?;

    println!(
        "  {}  {}  {}  {}",
        style(&episode.title).bold(),
        style(&episode.members).dim(),
        date,
        episode.duration.as_time_string(),
    );
    Ok(())
}

pub fn run_list(data_path: &str) -> Result<()> {
    let catalog = load_catalog(data_path)?;

    println!("{}", style("All episodes").bold().green());
    for record in catalog.episodes() {
        print_episode_row(record)?;
    }
    println!("  {} episodes", catalog.len());
    Ok(())
}

pub fn run_latest(data_path: &str, count: usize) -> Result<()> {
    let catalog = load_catalog(data_path)?;

    println!("{}", style("Latest releases").bold().green());
    for record in catalog.latest(count) {
        print_episode_row(record)?;
    }
    Ok(())
}

pub fn run_info(data_path: &str, id: &str) -> Result<()> {
    let catalog = load_catalog(data_path)?;
    let record = catalog
        .get(id)
        .with_context(|| format!("No episode '{}' in the catalog", id))?;

    println!("{}", style(&record.title).bold().cyan());
    println!("  {}", style(&record.members).dim());
    println!(
        "  Published: {}",
        record
            .published_at_display()
            .context("Invalid publication date")?
    );
    println!(
        "  Duration:  {}",
        podcastr_core::Duration::from_seconds(record.file.duration).as_time_string()
    );
    println!("  Media:     {} ({})", record.file.url, record.file.mime_type);
    println!();
    println!("{}", record.description);
    Ok(())
}

/// Plays one episode, dropping out of shuffle mode first
///
/// A single-episode queue has nothing to shuffle over; leaving the flag on
/// would make the next "advance" a pointless random draw over one element.
pub(crate) fn play_single(store: &PlayerStore, episode: Episode) {
    if store.is_shuffling() {
        store.toggle_shuffle();
    }
    store.play(episode);
}

pub fn run_play(data_path: &str, id: &str) -> Result<()> {
    let catalog = load_catalog(data_path)?;
    let record = catalog
        .get(id)
        .with_context(|| format!("No episode '{}' in the catalog", id))?;
    let episode = record.to_episode().context("Invalid episode record")?;

    let store = PlayerStore::new();
    play_single(&store, episode);

    let snapshot = store.snapshot();
    let playing = snapshot
        .current_episode
        .context("store has no current episode after play")?;
    println!(
        "{} {}",
        style("Now playing:").bold().green(),
        style(&playing.title).bold()
    );
    println!("  {}", style(&playing.members).dim());
    println!("  {}  {}", playing.duration.as_time_string(), playing.url);
    Ok(())
}

pub fn run_queue(
    data_path: &str,
    start: usize,
    steps: usize,
    shuffle: bool,
    looping: bool,
) -> Result<()> {
    let catalog = load_catalog(data_path)?;
    let queue = catalog.to_queue().context("Invalid episode record")?;

    let store = PlayerStore::new();
    let rx = store.subscribe();

    if shuffle {
        store.toggle_shuffle();
    }
    if looping {
        store.toggle_loop();
    }
    store
        .play_list(queue, start)
        .with_context(|| format!("Cannot start queue at index {}", start))?;

    for _ in 0..steps {
        store.advance();
    }

    println!("{}", style("Playback order").bold().green());
    for snapshot in rx.try_iter() {
        if let Some(episode) = snapshot.current_episode {
            let mode = if snapshot.is_shuffling { "shuffle" } else { "next" };
            println!(
                "  [{}] {}  {}",
                mode,
                style(&episode.title).bold(),
                episode.duration.as_time_string()
            );
        }
    }

    let end = store.snapshot();
    if end.is_looping {
        println!("  (loop flag set: host player restarts from the top when exhausted)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use podcastr_core::{Duration, EpisodeId};
    use std::io::Write;

    fn episode(id: &str) -> Episode {
        Episode::new(
            EpisodeId::from(id),
            format!("Episode {}", id),
            "Hosts".to_string(),
            format!("https://cdn.example.com/{}.jpg", id),
            Duration::from_seconds(600),
            format!("https://cdn.example.com/{}.mp3", id),
        )
    }

    fn dataset_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "episodes": [
                    {
                        "id": "ep-1",
                        "title": "Episode 1",
                        "members": "Hosts",
                        "published_at": "2021-01-08 12:00:00",
                        "thumbnail": "https://cdn.example.com/1.jpg",
                        "description": "<p>One</p>",
                        "file": {
                            "url": "https://cdn.example.com/1.mp3",
                            "type": "audio/mpeg",
                            "duration": 601
                        }
                    },
                    {
                        "id": "ep-2",
                        "title": "Episode 2",
                        "members": "Hosts",
                        "published_at": "2021-01-01 12:00:00",
                        "thumbnail": "https://cdn.example.com/2.jpg",
                        "description": "<p>Two</p>",
                        "file": {
                            "url": "https://cdn.example.com/2.mp3",
                            "type": "audio/mpeg",
                            "duration": 602
                        }
                    }
                ]
            }"#,
        )
        .unwrap();
        file
    }

    #[test]
    fn test_play_single_turns_shuffle_off() {
        let store = PlayerStore::new();
        store
            .play_list(vec![episode("a"), episode("b")], 0)
            .unwrap();
        store.toggle_shuffle();

        play_single(&store, episode("c"));

        let snapshot = store.snapshot();
        assert!(!snapshot.is_shuffling);
        assert_eq!(snapshot.queue.len(), 1);
        assert_eq!(snapshot.current_episode.unwrap().id.as_str(), "c");
    }

    #[test]
    fn test_play_single_without_shuffle_leaves_flags_alone() {
        let store = PlayerStore::new();
        store.toggle_loop();

        play_single(&store, episode("a"));

        let snapshot = store.snapshot();
        assert!(!snapshot.is_shuffling);
        assert!(snapshot.is_looping);
        assert!(snapshot.is_playing);
    }

    #[test]
    fn test_run_list_with_dataset() {
        let file = dataset_file();
        assert!(run_list(file.path().to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_run_info_unknown_id() {
        let file = dataset_file();
        let result = run_info(file.path().to_str().unwrap(), "missing");
        assert!(result.is_err());
    }

    #[test]
    fn test_run_queue_rejects_bad_start() {
        let file = dataset_file();
        let result = run_queue(file.path().to_str().unwrap(), 9, 1, false, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_queue_happy_path() {
        let file = dataset_file();
        assert!(run_queue(file.path().to_str().unwrap(), 0, 2, false, true).is_ok());
    }

    #[test]
    fn test_missing_dataset_is_an_error() {
        assert!(run_list("/no/such/episodes.json").is_err());
    }
}
