//! Shared store handle and change notification

use crate::state::{PlayerSnapshot, PlayerState};
use crate::PlayerResult;
use crossbeam_channel::{unbounded, Receiver, Sender};
use podcastr_core::Episode;
use std::sync::{Arc, Mutex};

struct Inner {
    state: PlayerState,
    subscribers: Vec<Sender<PlayerSnapshot>>,
}

/// Shared handle to the playback state
///
/// Cloning is cheap; every clone points at the same state. All mutations go
/// through the operations below, which serialize behind one lock, so no
/// subscriber ever observes a partially applied transition. Operations that
/// change nothing (advance past the end, retreat before the start, a
/// rejected `play_list`) publish nothing.
#[derive(Clone)]
pub struct PlayerStore {
    inner: Arc<Mutex<Inner>>,
}

impl PlayerStore {
    /// Creates a store with an empty queue
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: PlayerState::new(),
                subscribers: Vec::new(),
            })),
        }
    }

    /// Registers a subscriber; it receives a snapshot after every change
    pub fn subscribe(&self) -> Receiver<PlayerSnapshot> {
        let (tx, rx) = unbounded();
        let mut inner = self.inner.lock().unwrap();
        inner.subscribers.push(tx);
        rx
    }

    /// Returns an immutable copy of the current state
    pub fn snapshot(&self) -> PlayerSnapshot {
        let inner = self.inner.lock().unwrap();
        inner.state.snapshot()
    }

    /// The episode the cursor points at, if any
    pub fn current_episode(&self) -> Option<Episode> {
        let inner = self.inner.lock().unwrap();
        inner.state.current_episode().cloned()
    }

    pub fn is_playing(&self) -> bool {
        self.inner.lock().unwrap().state.is_playing()
    }

    pub fn is_looping(&self) -> bool {
        self.inner.lock().unwrap().state.is_looping()
    }

    pub fn is_shuffling(&self) -> bool {
        self.inner.lock().unwrap().state.is_shuffling()
    }

    /// Plays a single episode, replacing the queue
    pub fn play(&self, episode: Episode) {
        let mut inner = self.inner.lock().unwrap();
        inner.state.play(episode);
        Self::notify(&mut inner);
    }

    /// Plays `list` starting at `index`, replacing the queue
    ///
    /// Rejects an empty list or an out-of-range index; nothing changes and
    /// nothing is published in that case.
    pub fn play_list(&self, list: Vec<Episode>, index: usize) -> PlayerResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.state.play_list(list, index)?;
        Self::notify(&mut inner);
        Ok(())
    }

    /// Moves to the next episode (random in shuffle mode)
    pub fn advance(&self) {
        let mut inner = self.inner.lock().unwrap();
        if inner.state.advance() {
            Self::notify(&mut inner);
        }
    }

    /// Moves to the previous episode
    pub fn retreat(&self) {
        let mut inner = self.inner.lock().unwrap();
        if inner.state.retreat() {
            Self::notify(&mut inner);
        }
    }

    pub fn toggle_play(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.state.toggle_play();
        Self::notify(&mut inner);
    }

    pub fn toggle_loop(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.state.toggle_loop();
        Self::notify(&mut inner);
    }

    pub fn toggle_shuffle(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.state.toggle_shuffle();
        Self::notify(&mut inner);
    }

    /// Sets the playing flag to an explicit value
    pub fn set_playing(&self, playing: bool) {
        let mut inner = self.inner.lock().unwrap();
        inner.state.set_playing(playing);
        Self::notify(&mut inner);
    }

    /// Sends the fresh snapshot to every live subscriber, pruning dead ones
    fn notify(inner: &mut Inner) {
        let snapshot = inner.state.snapshot();
        inner
            .subscribers
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;
    use podcastr_core::{Duration, EpisodeId};

    fn episode(id: &str) -> Episode {
        Episode::new(
            EpisodeId::from(id),
            format!("Episode {}", id),
            "Hosts".to_string(),
            format!("https://cdn.example.com/{}.jpg", id),
            Duration::from_seconds(1200),
            format!("https://cdn.example.com/{}.mp3", id),
        )
    }

    #[test]
    fn test_clones_share_state() {
        let store = PlayerStore::new();
        let view = store.clone();

        store.play(episode("a"));

        assert_eq!(view.current_episode().unwrap().id.as_str(), "a");
        assert!(view.is_playing());
    }

    #[test]
    fn test_subscriber_receives_snapshot_per_change() {
        let store = PlayerStore::new();
        let rx = store.subscribe();

        store.play(episode("a"));
        store.toggle_loop();

        let first = rx.try_recv().unwrap();
        assert_eq!(first.current_episode.unwrap().id.as_str(), "a");
        assert!(!first.is_looping);

        let second = rx.try_recv().unwrap();
        assert!(second.is_looping);

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_boundary_noop_publishes_nothing() {
        let store = PlayerStore::new();
        store.play_list(vec![episode("a"), episode("b")], 1).unwrap();

        let rx = store.subscribe();
        store.advance(); // already at the last index
        store.retreat();
        store.retreat(); // already at the first index

        // Only the successful retreat published
        let snapshot = rx.try_recv().unwrap();
        assert_eq!(snapshot.cursor, Some(0));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_rejected_play_list_publishes_nothing() {
        let store = PlayerStore::new();
        let rx = store.subscribe();

        assert!(store.play_list(Vec::new(), 0).is_err());
        assert!(store.play_list(vec![episode("a")], 7).is_err());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let store = PlayerStore::new();
        let rx = store.subscribe();
        drop(rx);

        // Must not fail or leak; the dead sender is dropped on next notify
        store.play(episode("a"));
        store.toggle_play();
        assert!(!store.is_playing());
    }

    #[test]
    fn test_set_playing_publishes_even_when_unchanged() {
        let store = PlayerStore::new();
        let rx = store.subscribe();

        store.set_playing(false);

        let snapshot = rx.try_recv().unwrap();
        assert!(!snapshot.is_playing);
    }
}
