//! The world container and its file form.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::event::Event;
use crate::room::Room;

/// A complete game world: every room and event, plus where play begins.
///
/// Worlds are assembled with the `add_*` methods (or deserialized from a
/// world file) and are read-mostly afterwards; the runtime only mutates a
/// room's item list when the player takes something.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Id of the room where play begins. Must resolve at load time.
    pub start_room_id: String,
    /// All rooms, keyed by room id.
    #[serde(default)]
    pub rooms: BTreeMap<String, Room>,
    /// All events, keyed by event id.
    #[serde(default)]
    pub events: BTreeMap<String, Event>,
}

impl World {
    /// Create an empty world starting at the given room id.
    pub fn new(start_room_id: impl Into<String>) -> Self {
        Self {
            start_room_id: start_room_id.into(),
            rooms: BTreeMap::new(),
            events: BTreeMap::new(),
        }
    }

    /// Add a room, keyed by its own id.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.room_id.clone(), room);
    }

    /// Add an event, keyed by its own id.
    pub fn add_event(&mut self, event: Event) {
        self.events.insert(event.event_id.clone(), event);
    }

    /// Look up a room by id.
    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    /// Look up an event by id.
    pub fn event(&self, event_id: &str) -> Option<&Event> {
        self.events.get(event_id)
    }

    /// Parse a world from JSON and validate the start room.
    pub fn from_json(json: &str) -> WorldResult<Self> {
        let world: Self = serde_json::from_str(json)?;
        world.validate_start_room()?;
        Ok(world)
    }

    /// Load a world file from disk.
    pub fn load(path: impl AsRef<Path>) -> WorldResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed world-file JSON.
    pub fn to_json_pretty(&self) -> WorldResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the world file to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> WorldResult<()> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    fn validate_start_room(&self) -> WorldResult<()> {
        if self.rooms.contains_key(&self.start_room_id) {
            Ok(())
        } else {
            Err(WorldError::StartRoomMissing(self.start_room_id.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventPayload;
    use crate::room::{Item, Npc};

    const MINIMAL_WORLD: &str = r#"{
        "start_room_id": "gate",
        "rooms": {
            "gate": {
                "room_id": "gate",
                "name": "Western Gate",
                "description": "A towering iron gate.",
                "exits": {"east": "yard"},
                "items": [{"name": "key", "description": "a rusty key"}],
                "enemies": [],
                "npcs": [{"name": "Gatekeeper", "dialogue_id": "chat", "trigger_event_id": null}],
                "interactive_objects": {"sign": "sign_text"}
            },
            "yard": {
                "room_id": "yard",
                "name": "Courtyard",
                "description": "A weedy courtyard."
            }
        },
        "events": {
            "chat": {
                "event_id": "chat",
                "event_type": "dialogue",
                "data": {"speaker": "Gatekeeper", "lines": ["Hello."]}
            },
            "sign_text": {
                "event_id": "sign_text",
                "event_type": "read",
                "data": {"text": "Keep out."}
            }
        }
    }"#;

    #[test]
    fn parse_world_file() {
        let world = World::from_json(MINIMAL_WORLD).unwrap();

        assert_eq!(world.start_room_id, "gate");
        assert_eq!(world.rooms.len(), 2);
        assert_eq!(world.events.len(), 2);

        let gate = world.room("gate").unwrap();
        assert_eq!(gate.exits.get("east"), Some(&"yard".to_string()));
        assert_eq!(gate.items[0].name, "key");
        assert!(gate.items[0].can_take);

        let chat = world.event("chat").unwrap();
        assert!(matches!(chat.payload, EventPayload::Dialogue(_)));
    }

    #[test]
    fn missing_start_room_fails_to_load() {
        let result = World::from_json(r#"{"start_room_id": "nowhere", "rooms": {}, "events": {}}"#);
        assert!(matches!(result, Err(WorldError::StartRoomMissing(id)) if id == "nowhere"));
    }

    #[test]
    fn malformed_json_fails_to_load() {
        assert!(matches!(
            World::from_json("not json"),
            Err(WorldError::Json(_))
        ));
    }

    #[test]
    fn missing_file_fails_to_load() {
        assert!(matches!(
            World::load("/definitely/not/a/world.json"),
            Err(WorldError::Io(_))
        ));
    }

    #[test]
    fn built_world_round_trips_through_disk() {
        let mut world = World::new("gate");
        let mut gate = Room::new("gate", "Western Gate", "A towering iron gate.");
        gate.add_exit("east", "yard");
        gate.add_item(Item::new("key", "a rusty key"));
        gate.add_npc(Npc::new("Gatekeeper", "chat"));
        world.add_room(gate);
        world.add_room(Room::new("yard", "Courtyard", "A weedy courtyard."));
        world.add_event(Event::dialogue("chat", "Gatekeeper", vec!["Hello.".into()]));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        world.save(&path).unwrap();

        let loaded = World::load(&path).unwrap();
        assert_eq!(loaded, world);
    }

    #[test]
    fn pretty_json_uses_wire_field_names() {
        let mut world = World::new("gate");
        world.add_room(Room::new("gate", "Gate", "A gate."));
        world.add_event(Event::read("sign_text", "Keep out."));

        let json = world.to_json_pretty().unwrap();
        assert!(json.contains("\"start_room_id\""));
        assert!(json.contains("\"interactive_objects\""));
        assert!(json.contains("\"event_type\""));
    }
}
