//! Validate a world file and report wiring problems.

use std::path::Path;

use colored::Colorize;

pub fn run(world_path: &Path) -> Result<(), String> {
    let world = super::load_world(world_path)?;
    let lints = fw_core::lint(&world);

    if lints.is_empty() {
        println!("  All checks passed for '{}'.", world_path.display());
        println!("  {} rooms, {} events", world.rooms.len(), world.events.len());
        return Ok(());
    }

    for lint in &lints {
        println!("  {} {lint}", "warning:".yellow().bold());
    }
    println!(
        "  {} warning{}",
        lints.len(),
        if lints.len() == 1 { "" } else { "s" },
    );
    Ok(())
}
