//! Rooms and the things found in them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A passive object the player can examine and, usually, pick up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, also the noun players type to take it
    /// (matched case-insensitively).
    pub name: String,
    /// Text shown when the item is examined.
    pub description: String,
    /// Whether the player can pick the item up. Absent in JSON means true.
    #[serde(default = "default_can_take")]
    pub can_take: bool,
}

fn default_can_take() -> bool {
    true
}

impl Item {
    /// Create a takeable item.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            can_take: true,
        }
    }

    /// Create a fixed item the player can see but not take.
    pub fn scenery(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            can_take: false,
        }
    }
}

/// A hostile creature. Parsed and displayed; combat is not implemented,
/// so no verb consumes these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Display name.
    pub name: String,
    /// Hit points.
    pub health: i32,
    /// Damage dealt per hit.
    pub attack_power: i32,
    /// Item dropped on defeat, if any.
    pub reward_item_name: Option<String>,
}

/// A character the player can talk to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    /// Display name, matched case-insensitively by the talk verb.
    pub name: String,
    /// Id of the dialogue event this NPC speaks.
    pub dialogue_id: String,
    /// Follow-on event fired after the dialogue. Kept in world files for
    /// compatibility; nothing invokes it.
    pub trigger_event_id: Option<String>,
}

impl Npc {
    /// Create an NPC speaking the given dialogue event.
    pub fn new(name: impl Into<String>, dialogue_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dialogue_id: dialogue_id.into(),
            trigger_event_id: None,
        }
    }
}

/// An addressable location in the world graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique, stable id used by exits and the start-room reference.
    pub room_id: String,
    /// Display name.
    pub name: String,
    /// Text shown when the room is rendered.
    pub description: String,
    /// Direction token → target room id.
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
    /// Items lying in the room. Taking one removes it from here.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Hostile creatures present (display only).
    #[serde(default)]
    pub enemies: Vec<Enemy>,
    /// Characters the player can talk to.
    #[serde(default)]
    pub npcs: Vec<Npc>,
    /// Named features bound to an event id (chests, signs, inscriptions).
    #[serde(default)]
    pub interactive_objects: BTreeMap<String, String>,
}

impl Room {
    /// Create an empty room.
    pub fn new(
        room_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            enemies: Vec::new(),
            npcs: Vec::new(),
            interactive_objects: BTreeMap::new(),
        }
    }

    /// Add a directional exit to another room id.
    pub fn add_exit(&mut self, direction: impl Into<String>, target_room_id: impl Into<String>) {
        self.exits.insert(direction.into(), target_room_id.into());
    }

    /// Add an item to the room.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Add an enemy to the room.
    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Add an NPC to the room.
    pub fn add_npc(&mut self, npc: Npc) {
        self.npcs.push(npc);
    }

    /// Bind a named feature to an event id.
    pub fn add_object(&mut self, name: impl Into<String>, event_id: impl Into<String>) {
        self.interactive_objects.insert(name.into(), event_id.into());
    }

    /// Find an NPC by name (case-insensitive).
    pub fn find_npc(&self, name: &str) -> Option<&Npc> {
        let name = name.to_lowercase();
        self.npcs.iter().find(|npc| npc.name.to_lowercase() == name)
    }
}
