//! Player state.

use fw_core::Item;

/// The player's mutable state for one session.
#[derive(Debug, Clone)]
pub struct Player {
    /// Id of the room the player is in.
    pub room_id: String,
    /// Items carried, in the order they were taken.
    pub inventory: Vec<Item>,
    /// Hit points. Rendered in the room banner; no verb changes it.
    pub health: i32,
    /// Attack power. Reserved for combat, which is not implemented.
    pub attack_power: i32,
}

impl Player {
    /// Create a player standing in the given room.
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            inventory: Vec::new(),
            health: 100,
            attack_power: 10,
        }
    }

    /// Whether the player carries an item with this name (case-insensitive).
    pub fn carries(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.inventory
            .iter()
            .any(|item| item.name.to_lowercase() == name)
    }

    /// Add an item to the inventory.
    pub fn take(&mut self, item: Item) {
        self.inventory.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_defaults() {
        let player = Player::new("gate");
        assert_eq!(player.room_id, "gate");
        assert!(player.inventory.is_empty());
        assert_eq!(player.health, 100);
        assert_eq!(player.attack_power, 10);
    }

    #[test]
    fn carries_is_case_insensitive() {
        let mut player = Player::new("gate");
        assert!(!player.carries("Sunstone Key"));

        player.take(Item::new("Sunstone Key", "a warm orange key"));
        assert!(player.carries("sunstone key"));
        assert!(player.carries("SUNSTONE KEY"));
        assert!(!player.carries("iron key"));
    }

    #[test]
    fn take_preserves_order() {
        let mut player = Player::new("gate");
        player.take(Item::new("sword", "a sword"));
        player.take(Item::new("coin", "a coin"));

        let names: Vec<&str> = player.inventory.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["sword", "coin"]);
    }
}
