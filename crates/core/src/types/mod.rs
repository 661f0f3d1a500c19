//! Core domain types

mod common;
mod episode;

pub use common::{Duration, Validator};
pub use episode::{Episode, EpisodeId};
