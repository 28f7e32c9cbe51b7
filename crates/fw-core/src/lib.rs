//! Core types for Fablewright: the world data model and its JSON file form.
//!
//! This crate defines the data a game is made of: rooms, items, NPCs,
//! enemies, interactive objects, and the events they trigger, plus the
//! serialization to and from a single JSON world file. It knows nothing
//! about running a game; the runtime lives in `fw-engine`.

/// Error types used throughout the crate.
pub mod error;
/// Narrative events: dialogue, readable text, and chests.
pub mod event;
/// Rooms and the things found in them.
pub mod room;
/// Authoring-time lint pass over a complete world.
pub mod validate;
/// The world container and its file form.
pub mod world;

pub use error::{WorldError, WorldResult};
pub use event::{Chest, Dialogue, Event, EventPayload, Passage};
pub use room::{Enemy, Item, Npc, Room};
pub use validate::{Lint, lint};
pub use world::World;
