//! Execution of narrative events.

use fw_core::{Chest, Dialogue, Event, EventPayload, Passage};

use crate::player::Player;

/// Fallback shown when a readable event carries no text.
const FADED_TEXT: &str = "The text is too faded to read.";

/// What running an event did, with the player-facing text.
///
/// The variants separate the two failure classes: [`EventOutcome::ChestLocked`]
/// is the player's problem (come back with the key), while
/// [`EventOutcome::UnknownType`] is the world file's problem (the author
/// wired in an event type the engine does not know).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Dialogue or readable text was shown. No state changed.
    Narrated(String),
    /// A chest opened and its items were granted.
    ChestOpened(String),
    /// A chest refused to open for lack of its key. No state changed.
    ChestLocked(String),
    /// The event's type is outside the known set. No state changed.
    UnknownType(String),
}

impl EventOutcome {
    /// The text to show the player.
    pub fn message(&self) -> &str {
        match self {
            Self::Narrated(m) | Self::ChestOpened(m) | Self::ChestLocked(m) | Self::UnknownType(m) => {
                m
            }
        }
    }
}

/// Execute one event against the player.
pub fn run(event: &Event, player: &mut Player) -> EventOutcome {
    match &event.payload {
        EventPayload::Dialogue(dialogue) => EventOutcome::Narrated(run_dialogue(dialogue)),
        EventPayload::Read(passage) => EventOutcome::Narrated(run_read(passage)),
        EventPayload::Chest(chest) => run_chest(chest, player),
        EventPayload::Unknown { event_type } => EventOutcome::UnknownType(format!(
            "System Error: Unknown event type '{event_type}'."
        )),
    }
}

fn run_dialogue(dialogue: &Dialogue) -> String {
    let speaker = dialogue.speaker.as_deref().unwrap_or("Stranger");
    let mut out = format!("--- Dialogue with {speaker} ---");
    for line in &dialogue.lines {
        out.push_str(&format!("\n  > {line}"));
    }
    out.push_str("\n---------------------------------");
    out
}

fn run_read(passage: &Passage) -> String {
    let text = passage.text.as_deref().unwrap_or(FADED_TEXT);
    format!("You read:\n  *** {text} ***")
}

fn run_chest(chest: &Chest, player: &mut Player) -> EventOutcome {
    if let Some(key) = &chest.key_name {
        if !player.carries(key) {
            return EventOutcome::ChestLocked(format!(
                "The chest is locked. It requires a {key}."
            ));
        }
    }

    let mut out = String::from("The chest opens with a deep thud.");
    for item in &chest.items {
        out.push_str(&format!("\nYou took the {}.", item.name));
        player.take(item.clone());
    }
    EventOutcome::ChestOpened(out)
}
