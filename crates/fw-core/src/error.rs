//! Error types used throughout the crate.

use thiserror::Error;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors raised while loading or saving a world file.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The world file could not be read or written.
    #[error("cannot access world file: {0}")]
    Io(#[from] std::io::Error),

    /// The world file is not valid JSON or does not match the expected
    /// shape. Malformed payloads of recognized event types land here too.
    #[error("malformed world file: {0}")]
    Json(#[from] serde_json::Error),

    /// The start room id does not resolve to a room.
    #[error("start room \"{0}\" is missing from the room table")]
    StartRoomMissing(String),
}
