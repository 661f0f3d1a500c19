//! Playback State Store - playback state management for Podcastr
//!
//! Single source of truth for "what is playing and how": an ordered episode
//! queue, a cursor into it, and the play/loop/shuffle flags. Views hold a
//! cloned [`PlayerStore`] handle, mutate only through its operations, and
//! re-render from the snapshots it publishes.

mod error;
mod state;
mod store;

pub use error::{PlayerError, PlayerResult};
pub use state::{PlayerSnapshot, PlayerState};
pub use store::PlayerStore;
