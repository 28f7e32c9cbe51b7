pub mod check;
pub mod list;
pub mod new;
pub mod play;

use std::path::Path;

use fw_core::World;

/// Load a world file, mapping load faults to a printable message.
fn load_world(path: &Path) -> Result<World, String> {
    World::load(path).map_err(|e| format!("{}: {e}", path.display()))
}
