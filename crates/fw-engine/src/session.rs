//! The play session: command routing and room rendering.

use std::collections::BTreeSet;

use fw_core::{EventPayload, Room, World};

use crate::error::{EngineError, EngineResult};
use crate::interpreter::{self, EventOutcome};
use crate::parser::{self, Command, parse_command};
use crate::player::Player;

/// What one processed command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Player-facing text. Empty for a blank input line.
    pub message: String,
    /// Whether the player changed rooms; the caller should re-render.
    pub moved: bool,
    /// Whether the player asked to end the session.
    pub quit: bool,
}

impl Turn {
    fn say(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            moved: false,
            quit: false,
        }
    }
}

/// The two interactive-object verbs and the payload kind each may trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectVerb {
    Open,
    Read,
}

impl ObjectVerb {
    fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Read => "read",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            Self::Open => "Open what?",
            Self::Read => "Read what?",
        }
    }

    /// The allowed-verb-per-event-type table, consulted before dispatch.
    fn allows(self, payload: &EventPayload) -> bool {
        matches!(
            (self, payload),
            (Self::Open, EventPayload::Chest(_)) | (Self::Read, EventPayload::Read(_))
        )
    }
}

/// One player's run through a world.
///
/// The session owns the world and the player. Handlers look the current
/// room up fresh from the player's position on every dispatch; a verb that
/// moves the player reports it through [`Turn::moved`] so the caller knows
/// to re-render.
pub struct Session {
    world: World,
    player: Player,
    /// (room id, object name) pairs of chests already emptied.
    opened: BTreeSet<(String, String)>,
}

impl Session {
    /// Start a session with the player in the world's start room.
    pub fn new(world: World) -> EngineResult<Self> {
        if world.room(&world.start_room_id).is_none() {
            return Err(EngineError::RoomVanished(world.start_room_id.clone()));
        }
        let player = Player::new(world.start_room_id.clone());
        Ok(Self {
            world,
            player,
            opened: BTreeSet::new(),
        })
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player's current state.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the player, for embedding sessions in other tools.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Process one line of input. Blank input is a no-op turn.
    pub fn process(&mut self, input: &str) -> EngineResult<Turn> {
        match parse_command(input) {
            Some(command) => self.execute(command),
            None => Ok(Turn::say("")),
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> EngineResult<Turn> {
        match command {
            Command::Move { direction } => self.do_move(&direction),
            Command::Take { item } => self.do_take(&item),
            Command::Talk { character } => self.do_talk(&character),
            Command::Open { object } => self.do_interact(ObjectVerb::Open, &object),
            Command::Read { object } => self.do_interact(ObjectVerb::Read, &object),
            Command::Look => Ok(Turn::say(self.describe_room()?)),
            Command::Inventory => Ok(self.do_inventory()),
            Command::Quit => Ok(Turn {
                message: "Goodbye!".to_string(),
                moved: false,
                quit: true,
            }),
            Command::Unknown { input } => self.do_unknown(&input),
        }
    }

    /// Render the current room: banner, description, and every non-empty
    /// content section.
    pub fn describe_room(&self) -> EngineResult<String> {
        let room = room_here(&self.world, &self.player.room_id)?;

        let mut out = String::from("=====================================\n");
        out.push_str(&format!("LOCATION: {}\n", room.name.to_uppercase()));
        out.push_str(&format!("HEALTH: {}\n", self.player.health));
        out.push_str("=====================================\n");
        out.push_str(&room.description);

        let items: Vec<&str> = room.items.iter().map(|i| i.name.as_str()).collect();
        if !items.is_empty() {
            out.push_str(&format!("\nItems: {}", items.join(", ")));
        }
        let objects: Vec<&str> = room.interactive_objects.keys().map(String::as_str).collect();
        if !objects.is_empty() {
            out.push_str(&format!("\nObjects: {}", objects.join(", ")));
        }
        let enemies: Vec<&str> = room.enemies.iter().map(|e| e.name.as_str()).collect();
        if !enemies.is_empty() {
            out.push_str(&format!("\nDANGER! Enemies present: {}", enemies.join(", ")));
        }
        let npcs: Vec<&str> = room.npcs.iter().map(|n| n.name.as_str()).collect();
        if !npcs.is_empty() {
            out.push_str(&format!("\nPeople: {}", npcs.join(", ")));
        }
        let exits: Vec<&str> = room.exits.keys().map(String::as_str).collect();
        if !exits.is_empty() {
            out.push_str(&format!("\nExits: {}", exits.join(", ")));
        }
        out.push_str("\n-------------------------------------");
        Ok(out)
    }

    fn do_move(&mut self, direction: &str) -> EngineResult<Turn> {
        if direction.is_empty() {
            return Ok(Turn::say("Go where?"));
        }
        let room = room_here(&self.world, &self.player.room_id)?;
        let Some(target) = room.exits.get(direction) else {
            return Ok(Turn::say("You can't go that way."));
        };
        if !self.world.rooms.contains_key(target) {
            return Ok(Turn::say(format!(
                "There's an exit {direction}, but its destination \"{target}\" is missing from the world."
            )));
        }
        self.player.room_id = target.clone();
        Ok(Turn {
            message: format!("You move {direction}..."),
            moved: true,
            quit: false,
        })
    }

    fn do_take(&mut self, noun: &str) -> EngineResult<Turn> {
        if noun.is_empty() {
            return Ok(Turn::say("Take what?"));
        }
        let room_id = self.player.room_id.clone();
        let Some(room) = self.world.rooms.get_mut(&room_id) else {
            return Err(EngineError::RoomVanished(room_id));
        };
        let Some(pos) = room
            .items
            .iter()
            .position(|item| item.name.to_lowercase() == noun)
        else {
            let hint = parser::closest(noun, room.items.iter().map(|i| i.name.as_str()))
                .map(|name| format!(" Did you mean the {name}?"))
                .unwrap_or_default();
            return Ok(Turn::say(format!("I don't see a '{noun}' here.{hint}")));
        };
        if !room.items[pos].can_take {
            return Ok(Turn::say(format!(
                "The {} is too heavy or fixed in place.",
                room.items[pos].name
            )));
        }
        let item = room.items.remove(pos);
        let message = format!("You took the {}.", item.name);
        self.player.take(item);
        Ok(Turn::say(message))
    }

    fn do_talk(&mut self, noun: &str) -> EngineResult<Turn> {
        if noun.is_empty() {
            return Ok(Turn::say("Talk to whom?"));
        }
        let room = room_here(&self.world, &self.player.room_id)?;
        let Some(npc) = room.find_npc(noun) else {
            return Ok(Turn::say("Talk to whom?"));
        };

        // The verb/event-type table: talk only ever runs dialogue. A missing
        // or mis-typed event gets the same graceful fallback.
        match self.world.event(&npc.dialogue_id) {
            Some(event) if matches!(event.payload, EventPayload::Dialogue(_)) => {
                let outcome = interpreter::run(event, &mut self.player);
                Ok(Turn::say(outcome.message()))
            }
            _ => Ok(Turn::say(format!("{} just nods silently.", npc.name))),
        }
    }

    fn do_interact(&mut self, verb: ObjectVerb, noun: &str) -> EngineResult<Turn> {
        if noun.is_empty() {
            return Ok(Turn::say(verb.prompt()));
        }
        let room = room_here(&self.world, &self.player.room_id)?;
        let Some(event_id) = room.interactive_objects.get(noun) else {
            return Ok(Turn::say(verb.prompt()));
        };

        let rejection = format!("You can't '{}' the {noun}.", verb.name());
        let Some(event) = self.world.event(event_id) else {
            return Ok(Turn::say(rejection));
        };
        if !verb.allows(&event.payload) {
            return Ok(Turn::say(rejection));
        }

        let marker = (self.player.room_id.clone(), noun.to_string());
        if matches!(event.payload, EventPayload::Chest(_)) && self.opened.contains(&marker) {
            return Ok(Turn::say(format!("The {noun} is already empty.")));
        }

        let outcome = interpreter::run(event, &mut self.player);
        if matches!(outcome, EventOutcome::ChestOpened(_)) {
            self.opened.insert(marker);
        }
        Ok(Turn::say(outcome.message()))
    }

    fn do_inventory(&self) -> Turn {
        if self.player.inventory.is_empty() {
            Turn::say("Your inventory is empty.")
        } else {
            let names: Vec<&str> = self
                .player
                .inventory
                .iter()
                .map(|item| item.name.as_str())
                .collect();
            Turn::say(format!("Inventory: {}", names.join(", ")))
        }
    }

    fn do_unknown(&mut self, input: &str) -> EngineResult<Turn> {
        // A bare exit name counts as movement.
        let room = room_here(&self.world, &self.player.room_id)?;
        if room.exits.contains_key(input) {
            let direction = input.to_string();
            return self.do_move(&direction);
        }

        let hint = parser::suggest_verb(input)
            .map(|verb| format!(" Did you mean '{verb}'?"))
            .unwrap_or_default();
        Ok(Turn::say(format!(
            "I don't understand that command: '{input}'.{hint}"
        )))
    }
}

fn room_here<'w>(world: &'w World, room_id: &str) -> EngineResult<&'w Room> {
    world
        .room(room_id)
        .ok_or_else(|| EngineError::RoomVanished(room_id.to_string()))
}
