//! Narrative events: dialogue, readable text, and chests.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::room::Item;

/// A dialogue payload: a speaker and their lines, emitted in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dialogue {
    /// Who is speaking. Rendered as "Stranger" when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    /// The lines spoken, in order.
    #[serde(default)]
    pub lines: Vec<String>,
}

/// A readable payload: inscriptions, signs, books.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Passage {
    /// The text revealed. A fixed fallback is rendered when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A chest payload: an optional key requirement and the items granted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chest {
    /// Name of the key item required to open, matched case-insensitively
    /// against the player's inventory. Absent means unlocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    /// Items granted, in order, when the chest opens.
    #[serde(default)]
    pub items: Vec<Item>,
}

/// The typed payload of an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    /// A conversation, spoken line by line.
    Dialogue(Dialogue),
    /// A piece of text the player reads.
    Read(Passage),
    /// A container granting items, optionally key-gated.
    Chest(Chest),
    /// An event type outside the known set. Preserved at load so it can be
    /// reported as a world-data fault if a verb ever dispatches it.
    Unknown {
        /// The unrecognized type tag.
        event_type: String,
    },
}

impl EventPayload {
    /// The wire name of this payload's type.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Dialogue(_) => "dialogue",
            Self::Read(_) => "read",
            Self::Chest(_) => "chest",
            Self::Unknown { event_type } => event_type,
        }
    }
}

/// A reusable, typed, data-driven script fragment invoked by id.
///
/// On disk an event is `{"event_id", "event_type", "data"}` with the data
/// shape depending on the type. A recognized type with a malformed data
/// payload fails at load; an unrecognized type is preserved as
/// [`EventPayload::Unknown`] and only faults when dispatched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent", into = "RawEvent")]
pub struct Event {
    /// Unique id, referenced by NPCs and interactive objects.
    pub event_id: String,
    /// The typed payload.
    pub payload: EventPayload,
}

impl Event {
    /// Create a dialogue event.
    pub fn dialogue(
        event_id: impl Into<String>,
        speaker: impl Into<String>,
        lines: Vec<String>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            payload: EventPayload::Dialogue(Dialogue {
                speaker: Some(speaker.into()),
                lines,
            }),
        }
    }

    /// Create a readable-text event.
    pub fn read(event_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            payload: EventPayload::Read(Passage {
                text: Some(text.into()),
            }),
        }
    }

    /// Create a chest event. A key name of `None` makes the chest unlocked.
    pub fn chest(event_id: impl Into<String>, key_name: Option<String>, items: Vec<Item>) -> Self {
        Self {
            event_id: event_id.into(),
            payload: EventPayload::Chest(Chest { key_name, items }),
        }
    }
}

/// The on-disk form of an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawEvent {
    event_id: String,
    event_type: String,
    #[serde(default = "empty_data")]
    data: Value,
}

fn empty_data() -> Value {
    Value::Object(serde_json::Map::new())
}

impl TryFrom<RawEvent> for Event {
    type Error = String;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let RawEvent {
            event_id,
            event_type,
            data,
        } = raw;
        let payload = match event_type.as_str() {
            "dialogue" => EventPayload::Dialogue(parse_data(&event_id, &event_type, data)?),
            "read" => EventPayload::Read(parse_data(&event_id, &event_type, data)?),
            "chest" => EventPayload::Chest(parse_data(&event_id, &event_type, data)?),
            other => EventPayload::Unknown {
                event_type: other.to_string(),
            },
        };
        Ok(Self { event_id, payload })
    }
}

fn parse_data<T: DeserializeOwned>(
    event_id: &str,
    event_type: &str,
    data: Value,
) -> Result<T, String> {
    serde_json::from_value(data)
        .map_err(|e| format!("event \"{event_id}\" has a malformed {event_type} payload: {e}"))
}

impl From<Event> for RawEvent {
    fn from(event: Event) -> Self {
        let (event_type, data) = match event.payload {
            EventPayload::Dialogue(dialogue) => ("dialogue".to_string(), to_data(&dialogue)),
            EventPayload::Read(passage) => ("read".to_string(), to_data(&passage)),
            EventPayload::Chest(chest) => ("chest".to_string(), to_data(&chest)),
            EventPayload::Unknown { event_type } => (event_type, empty_data()),
        };
        Self {
            event_id: event.event_id,
            event_type,
            data,
        }
    }
}

fn to_data<T: Serialize>(payload: &T) -> Value {
    serde_json::to_value(payload).unwrap_or_default()
}
