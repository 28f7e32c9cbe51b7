//! Error types for the runtime.

use thiserror::Error;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Fatal runtime faults. Everything a player can cause is reported as turn
/// text instead; these only fire when the world data breaks under the
/// session's feet.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The player's current room id no longer resolves to a room. There is
    /// nowhere safe to render, so the session cannot continue.
    #[error("the current room \"{0}\" is missing from the world")]
    RoomVanished(String),
}
