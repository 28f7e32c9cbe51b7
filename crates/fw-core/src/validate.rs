//! Authoring-time lint pass over a complete world.
//!
//! Lints report wiring problems a world can technically run with (the
//! runtime degrades gracefully on each of them) but that an author wants
//! to know about before shipping a world file.

use std::fmt;

use crate::event::EventPayload;
use crate::world::World;

/// A single authoring warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lint {
    /// An exit points at a room id that does not exist.
    DanglingExit {
        /// Room the exit leaves from.
        room_id: String,
        /// Direction token of the exit.
        direction: String,
        /// The missing target room id.
        target: String,
    },
    /// An interactive object is bound to a missing event id.
    ObjectWithoutEvent {
        /// Room the object is in.
        room_id: String,
        /// Object name.
        object: String,
        /// The missing event id.
        event_id: String,
    },
    /// An NPC's dialogue id resolves to nothing.
    SilentNpc {
        /// Room the NPC is in.
        room_id: String,
        /// NPC name.
        npc: String,
        /// The missing dialogue event id.
        dialogue_id: String,
    },
    /// An NPC's dialogue id resolves to a non-dialogue event.
    MiswiredDialogue {
        /// Room the NPC is in.
        room_id: String,
        /// NPC name.
        npc: String,
        /// The referenced event id.
        dialogue_id: String,
        /// The type the referenced event actually has.
        event_type: String,
    },
    /// An event's type is outside the known set.
    UnknownEventType {
        /// The event id.
        event_id: String,
        /// The unrecognized type tag.
        event_type: String,
    },
}

impl fmt::Display for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingExit {
                room_id,
                direction,
                target,
            } => write!(
                f,
                "room \"{room_id}\": exit \"{direction}\" leads to missing room \"{target}\""
            ),
            Self::ObjectWithoutEvent {
                room_id,
                object,
                event_id,
            } => write!(
                f,
                "room \"{room_id}\": object \"{object}\" is bound to missing event \"{event_id}\""
            ),
            Self::SilentNpc {
                room_id,
                npc,
                dialogue_id,
            } => write!(
                f,
                "room \"{room_id}\": npc \"{npc}\" references missing dialogue \"{dialogue_id}\""
            ),
            Self::MiswiredDialogue {
                room_id,
                npc,
                dialogue_id,
                event_type,
            } => write!(
                f,
                "room \"{room_id}\": npc \"{npc}\" points at \"{dialogue_id}\", \
                 which is a {event_type} event, not dialogue"
            ),
            Self::UnknownEventType {
                event_id,
                event_type,
            } => write!(f, "event \"{event_id}\" has unknown type \"{event_type}\""),
        }
    }
}

/// Check a world for wiring problems. An empty result means a clean world.
pub fn lint(world: &World) -> Vec<Lint> {
    let mut lints = Vec::new();

    for (room_id, room) in &world.rooms {
        for (direction, target) in &room.exits {
            if !world.rooms.contains_key(target) {
                lints.push(Lint::DanglingExit {
                    room_id: room_id.clone(),
                    direction: direction.clone(),
                    target: target.clone(),
                });
            }
        }

        for (object, event_id) in &room.interactive_objects {
            if world.event(event_id).is_none() {
                lints.push(Lint::ObjectWithoutEvent {
                    room_id: room_id.clone(),
                    object: object.clone(),
                    event_id: event_id.clone(),
                });
            }
        }

        for npc in &room.npcs {
            match world.event(&npc.dialogue_id) {
                None => lints.push(Lint::SilentNpc {
                    room_id: room_id.clone(),
                    npc: npc.name.clone(),
                    dialogue_id: npc.dialogue_id.clone(),
                }),
                Some(event) => {
                    if !matches!(event.payload, EventPayload::Dialogue(_)) {
                        lints.push(Lint::MiswiredDialogue {
                            room_id: room_id.clone(),
                            npc: npc.name.clone(),
                            dialogue_id: npc.dialogue_id.clone(),
                            event_type: event.payload.type_name().to_string(),
                        });
                    }
                }
            }
        }
    }

    for (event_id, event) in &world.events {
        if let EventPayload::Unknown { event_type } = &event.payload {
            lints.push(Lint::UnknownEventType {
                event_id: event_id.clone(),
                event_type: event_type.clone(),
            });
        }
    }

    lints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::room::{Item, Npc, Room};

    fn clean_world() -> World {
        let mut world = World::new("gate");

        let mut gate = Room::new("gate", "Gate", "A gate.");
        gate.add_exit("east", "yard");
        gate.add_npc(Npc::new("Gatekeeper", "chat"));
        world.add_room(gate);

        let mut yard = Room::new("yard", "Yard", "A yard.");
        yard.add_exit("west", "gate");
        yard.add_object("chest", "chest_vault");
        world.add_room(yard);

        world.add_event(Event::dialogue("chat", "Gatekeeper", vec!["Hello.".into()]));
        world.add_event(Event::chest(
            "chest_vault",
            None,
            vec![Item::new("coin", "a coin")],
        ));
        world
    }

    #[test]
    fn clean_world_has_no_lints() {
        assert!(lint(&clean_world()).is_empty());
    }

    #[test]
    fn dangling_exit_is_reported() {
        let mut world = clean_world();
        let mut tower = Room::new("tower", "Tower", "A tower.");
        tower.add_exit("down", "cellar");
        world.add_room(tower);

        let lints = lint(&world);
        assert!(lints.contains(&Lint::DanglingExit {
            room_id: "tower".into(),
            direction: "down".into(),
            target: "cellar".into(),
        }));
    }

    #[test]
    fn object_without_event_is_reported() {
        let mut world = clean_world();
        let mut tower = Room::new("tower", "Tower", "A tower.");
        tower.add_object("lever", "no_such_event");
        world.add_room(tower);

        let lints = lint(&world);
        assert!(lints.iter().any(|l| matches!(
            l,
            Lint::ObjectWithoutEvent { object, .. } if object == "lever"
        )));
    }

    #[test]
    fn silent_and_miswired_npcs_are_reported() {
        let mut world = clean_world();
        let mut tower = Room::new("tower", "Tower", "A tower.");
        tower.add_npc(Npc::new("Hermit", "no_such_event"));
        tower.add_npc(Npc::new("Trickster", "chest_vault"));
        world.add_room(tower);

        let lints = lint(&world);
        assert!(lints.iter().any(|l| matches!(
            l,
            Lint::SilentNpc { npc, .. } if npc == "Hermit"
        )));
        assert!(lints.iter().any(|l| matches!(
            l,
            Lint::MiswiredDialogue { npc, event_type, .. }
                if npc == "Trickster" && event_type == "chest"
        )));
    }

    #[test]
    fn unknown_event_type_is_reported() {
        let mut world = clean_world();
        let event: Event = serde_json::from_str(
            r#"{"event_id": "fight", "event_type": "combat", "data": {}}"#,
        )
        .unwrap();
        world.add_event(event);

        let lints = lint(&world);
        assert!(lints.contains(&Lint::UnknownEventType {
            event_id: "fight".into(),
            event_type: "combat".into(),
        }));
    }
}
