//! The Fablewright runtime: a play session over a loaded world.
//!
//! `fw-core` describes what a world is; this crate makes it playable.
//! The split follows the data flow of one turn: `parser` turns a line of
//! text into a [`Command`], [`Session`] routes the command to a handler
//! that reads or mutates player and room state, and `interpreter` executes
//! any narrative event the handler dispatched. Rendering stays with the
//! caller: a [`Turn`] reports what happened and whether the room changed,
//! not how to print it.

/// Error types for the runtime.
pub mod error;
/// Execution of narrative events.
pub mod interpreter;
/// Command parsing and input suggestions.
pub mod parser;
/// Player state.
pub mod player;
/// The play session: command routing and room rendering.
pub mod session;

pub use error::{EngineError, EngineResult};
pub use interpreter::EventOutcome;
pub use parser::{Command, parse_command};
pub use player::Player;
pub use session::{Session, Turn};
