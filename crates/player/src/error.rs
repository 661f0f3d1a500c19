use thiserror::Error;

/// Errors for out-of-contract playback requests
///
/// The store rejects these instead of clamping: clamping would silently
/// start a different episode than the caller asked for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("Cannot play an empty episode list")]
    EmptyList,

    #[error("Start index {index} out of range for a list of {len} episodes")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type PlayerResult<T> = std::result::Result<T, PlayerError>;
