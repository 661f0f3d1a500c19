//! Playback state record and transition logic

use crate::{PlayerError, PlayerResult};
use podcastr_core::Episode;
use rand::Rng;
use serde::Serialize;

/// The playback state record
///
/// Invariant: `cursor` is `None` exactly when `queue` is empty; otherwise it
/// is a valid index into `queue`. Every transition below preserves this.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    queue: Vec<Episode>,
    cursor: Option<usize>,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

impl PlayerState {
    /// Creates the empty session-start state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &[Episode] {
        &self.queue
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The episode the cursor points at, if any
    pub fn current_episode(&self) -> Option<&Episode> {
        self.cursor.and_then(|i| self.queue.get(i))
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Replaces the queue with a single episode and starts playing
    pub fn play(&mut self, episode: Episode) {
        log::debug!("play: '{}'", episode.title);
        self.queue = vec![episode];
        self.cursor = Some(0);
        self.is_playing = true;
    }

    /// Replaces the queue with `list` and starts playing at `index`
    ///
    /// Rejects an empty list or an out-of-range index, leaving the state
    /// untouched.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> PlayerResult<()> {
        if list.is_empty() {
            log::warn!("play_list rejected: empty episode list");
            return Err(PlayerError::EmptyList);
        }
        if index >= list.len() {
            log::warn!(
                "play_list rejected: index {} out of range for {} episodes",
                index,
                list.len()
            );
            return Err(PlayerError::IndexOutOfRange {
                index,
                len: list.len(),
            });
        }

        log::debug!("play_list: {} episodes, starting at {}", list.len(), index);
        self.queue = list;
        self.cursor = Some(index);
        self.is_playing = true;
        Ok(())
    }

    /// Moves the cursor to the next episode
    ///
    /// Sequential mode steps forward and stops at the end of the queue
    /// (no wrap; looping is a flag for the host player to interpret).
    /// Shuffle mode draws a uniformly random index over the current queue
    /// length, so re-selecting the same episode is possible by design.
    /// Returns whether the cursor moved. Never touches the playing flag.
    pub fn advance(&mut self) -> bool {
        let (cursor, len) = match (self.cursor, self.queue.len()) {
            (Some(cursor), len) if len > 0 => (cursor, len),
            _ => return false,
        };

        let next = if self.is_shuffling {
            rand::thread_rng().gen_range(0..len)
        } else {
            let candidate = cursor + 1;
            if candidate >= len {
                return false;
            }
            candidate
        };

        log::debug!("advance: cursor {} -> {}", cursor, next);
        self.cursor = Some(next);
        true
    }

    /// Moves the cursor to the previous episode
    ///
    /// Always a sequential backward step, even in shuffle mode; refuses to
    /// go before the first episode. Returns whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                log::debug!("retreat: cursor {} -> {}", cursor, cursor - 1);
                self.cursor = Some(cursor - 1);
                true
            }
            _ => false,
        }
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    /// Explicit assignment, no toggle semantics
    ///
    /// Used when an external event (the host media element ending naturally)
    /// must set the flag without flipping blindly.
    pub fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Builds an immutable snapshot for subscribers
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            queue: self.queue.clone(),
            cursor: self.cursor,
            current_episode: self.current_episode().cloned(),
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
        }
    }
}

/// Immutable view of the playback state, published on every change
///
/// Subscribers render from this copy; requesting changes goes through the
/// store operations, never through the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub queue: Vec<Episode>,
    pub cursor: Option<usize>,
    /// Derived once here so consumers agree on the derivation
    pub current_episode: Option<Episode>,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
}
