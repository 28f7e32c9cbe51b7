//! Scaffold a starter world file.

use std::path::Path;

use colored::Colorize;
use fw_core::{Event, Item, Npc, Room, World};

pub fn run(world_path: &Path) -> Result<(), String> {
    if world_path.exists() {
        return Err(format!("'{}' already exists", world_path.display()));
    }

    starter_world()
        .save(world_path)
        .map_err(|e| format!("cannot write world file: {e}"))?;

    println!(
        "Created starter world at {}.",
        world_path.display().to_string().bold()
    );
    println!();
    println!("Try it:");
    println!("  fw play --world {}", world_path.display());
    println!("  fw list --world {}", world_path.display());
    println!("  fw check --world {}", world_path.display());
    Ok(())
}

/// Three rooms, a gatekeeper, an inscription, and a locked chest.
pub(crate) fn starter_world() -> World {
    let mut world = World::new("western_gate");

    let mut gate = Room::new(
        "western_gate",
        "Western Gate",
        "You stand before a towering iron gate, guarded by an old man.",
    );
    gate.add_exit("east", "courtyard");
    gate.add_npc(Npc::new("Gatekeeper", "old_man_chat"));
    gate.add_item(Item::scenery("Worn Sign", "A sign reads: 'Keep Out'."));
    world.add_room(gate);

    let mut courtyard = Room::new(
        "courtyard",
        "Central Courtyard",
        "A vast, crumbling courtyard. A worn inscription marks a statue base.",
    );
    courtyard.add_exit("west", "western_gate");
    courtyard.add_exit("east", "tower_base");
    courtyard.add_item(Item::new(
        "Sunstone Key",
        "A strange, warm key made of polished orange stone.",
    ));
    courtyard.add_object("inscription", "ruin_inscription");
    world.add_room(courtyard);

    let mut tower = Room::new(
        "tower_base",
        "Eastern Tower Base",
        "The base of a collapsed tower. A locked chest sits in the corner.",
    );
    tower.add_exit("west", "courtyard");
    tower.add_object("chest", "chest_vault");
    world.add_room(tower);

    world.add_event(Event::dialogue(
        "old_man_chat",
        "Old Gatekeeper",
        vec![
            "Hello, traveler. The ruins are dangerous.".into(),
            "Only the bravest seek the Sunstone Key.".into(),
            "It's said to be hidden in the eastern tower.".into(),
        ],
    ));
    world.add_event(Event::read(
        "ruin_inscription",
        "The past is a lock, the present is the key. Seek what is hidden.",
    ));
    world.add_event(Event::chest(
        "chest_vault",
        Some("Sunstone Key".into()),
        vec![
            Item::new("Ancient Sword", "A magnificent sword, still sharp."),
            Item::new("Gold Coin", "A single gold coin."),
        ],
    ));

    world
}
