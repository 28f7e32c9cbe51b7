//! Tabular listing of a world file's rooms and events.

use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(world_path: &Path) -> Result<(), String> {
    let world = super::load_world(world_path)?;

    let mut rooms = Table::new();
    rooms.set_content_arrangement(ContentArrangement::Dynamic);
    rooms.set_header(vec!["Room", "Name", "Exits", "Contents"]);

    for (room_id, room) in &world.rooms {
        let exits: Vec<&str> = room.exits.keys().map(String::as_str).collect();

        let mut contents: Vec<String> = Vec::new();
        contents.extend(room.items.iter().map(|i| i.name.clone()));
        contents.extend(room.npcs.iter().map(|n| format!("{} (npc)", n.name)));
        contents.extend(room.enemies.iter().map(|e| format!("{} (enemy)", e.name)));
        contents.extend(
            room.interactive_objects
                .keys()
                .map(|object| format!("{object} (object)")),
        );

        rooms.add_row(vec![
            room_id.clone(),
            room.name.clone(),
            exits.join(", "),
            contents.join(", "),
        ]);
    }
    println!("{rooms}");

    let mut events = Table::new();
    events.set_content_arrangement(ContentArrangement::Dynamic);
    events.set_header(vec!["Event", "Type"]);
    for (event_id, event) in &world.events {
        events.add_row(vec![event_id.clone(), event.payload.type_name().to_string()]);
    }
    println!("{events}");

    println!();
    println!("  start room: {}", world.start_room_id);
    println!("  {} rooms, {} events", world.rooms.len(), world.events.len());
    Ok(())
}
