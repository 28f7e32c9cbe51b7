//! Parsing player input into commands.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move through an exit of the current room.
    Move {
        /// The direction token, matched against the room's exits.
        direction: String,
    },
    /// Pick up an item from the current room.
    Take {
        /// The item name.
        item: String,
    },
    /// Talk to an NPC in the current room.
    Talk {
        /// The NPC name.
        character: String,
    },
    /// Open an interactive object bound to a chest event.
    Open {
        /// The object name.
        object: String,
    },
    /// Read an interactive object bound to a readable event.
    Read {
        /// The object name.
        object: String,
    },
    /// Describe the current room again.
    Look,
    /// List the player's inventory.
    Inventory,
    /// End the session.
    Quit,
    /// Input no verb table matched.
    Unknown {
        /// The original input, lower-cased.
        input: String,
    },
}

/// Verb aliases, one table per handler.
const MOVE_VERBS: &[&str] = &["go", "move", "walk"];
const TAKE_VERBS: &[&str] = &["take", "get", "grab", "pick"];
const TALK_VERBS: &[&str] = &["talk", "speak"];
const OPEN_VERBS: &[&str] = &["open"];
const READ_VERBS: &[&str] = &["read"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const QUIT_VERBS: &[&str] = &["quit", "exit", "q"];

/// Every multi-letter verb alias, for suggestion lookups.
pub(crate) const KNOWN_VERBS: &[&str] = &[
    "go",
    "move",
    "walk",
    "take",
    "get",
    "grab",
    "pick",
    "talk",
    "speak",
    "open",
    "read",
    "look",
    "inventory",
    "inv",
    "quit",
    "exit",
];

/// Parse one line of player input.
///
/// The line is lower-cased and split on whitespace; the first token picks
/// the verb and the remaining tokens, re-joined with single spaces, form
/// the noun. Blank input parses to `None` and consumes no turn.
pub fn parse_command(input: &str) -> Option<Command> {
    let lowered = input.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let (&verb, rest) = words.split_first()?;

    let command = if MOVE_VERBS.contains(&verb) {
        Command::Move {
            direction: rest.join(" "),
        }
    } else if TAKE_VERBS.contains(&verb) {
        parse_take(rest)
    } else if TALK_VERBS.contains(&verb) {
        parse_talk(rest)
    } else if OPEN_VERBS.contains(&verb) {
        Command::Open {
            object: rest.join(" "),
        }
    } else if READ_VERBS.contains(&verb) {
        Command::Read {
            object: rest.join(" "),
        }
    } else if LOOK_VERBS.contains(&verb) {
        Command::Look
    } else if INVENTORY_VERBS.contains(&verb) {
        Command::Inventory
    } else if QUIT_VERBS.contains(&verb) {
        Command::Quit
    } else {
        Command::Unknown { input: lowered }
    };

    Some(command)
}

fn parse_take(rest: &[&str]) -> Command {
    // Skip "up" so "pick up the key" works.
    let item_words = match rest.first() {
        Some(&"up") => &rest[1..],
        _ => rest,
    };
    Command::Take {
        item: item_words.join(" "),
    }
}

fn parse_talk(rest: &[&str]) -> Command {
    // Skip "to" or "with" so "talk to the gatekeeper" works.
    let name_words = match rest.first() {
        Some(&"to" | &"with") => &rest[1..],
        _ => rest,
    };
    Command::Talk {
        character: name_words.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_move_aliases() {
        for verb in ["go", "move", "walk"] {
            assert_eq!(
                parse_command(&format!("{verb} east")),
                Some(Command::Move {
                    direction: "east".to_string()
                })
            );
        }
    }

    #[test]
    fn parse_take_aliases() {
        for verb in ["take", "get", "grab"] {
            assert_eq!(
                parse_command(&format!("{verb} key")),
                Some(Command::Take {
                    item: "key".to_string()
                })
            );
        }
        assert_eq!(
            parse_command("pick up the rusty key"),
            Some(Command::Take {
                item: "the rusty key".to_string()
            })
        );
    }

    #[test]
    fn parse_talk_skips_connectives() {
        assert_eq!(
            parse_command("talk to gatekeeper"),
            Some(Command::Talk {
                character: "gatekeeper".to_string()
            })
        );
        assert_eq!(
            parse_command("speak with gatekeeper"),
            Some(Command::Talk {
                character: "gatekeeper".to_string()
            })
        );
        assert_eq!(
            parse_command("talk gatekeeper"),
            Some(Command::Talk {
                character: "gatekeeper".to_string()
            })
        );
    }

    #[test]
    fn parse_open_and_read() {
        assert_eq!(
            parse_command("open chest"),
            Some(Command::Open {
                object: "chest".to_string()
            })
        );
        assert_eq!(
            parse_command("read inscription"),
            Some(Command::Read {
                object: "inscription".to_string()
            })
        );
    }

    #[test]
    fn parse_look_ignores_noun() {
        assert_eq!(parse_command("look"), Some(Command::Look));
        assert_eq!(parse_command("l"), Some(Command::Look));
        assert_eq!(parse_command("look chest"), Some(Command::Look));
    }

    #[test]
    fn parse_inventory_and_quit() {
        assert_eq!(parse_command("inventory"), Some(Command::Inventory));
        assert_eq!(parse_command("inv"), Some(Command::Inventory));
        assert_eq!(parse_command("i"), Some(Command::Inventory));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn input_is_lower_cased() {
        assert_eq!(
            parse_command("TAKE Sunstone Key"),
            Some(Command::Take {
                item: "sunstone key".to_string()
            })
        );
    }

    #[test]
    fn noun_tokens_rejoin_with_single_spaces() {
        assert_eq!(
            parse_command("take   rusty    key"),
            Some(Command::Take {
                item: "rusty key".to_string()
            })
        );
    }

    #[test]
    fn missing_noun_parses_to_empty_string() {
        assert_eq!(
            parse_command("go"),
            Some(Command::Move {
                direction: String::new()
            })
        );
        assert_eq!(
            parse_command("take"),
            Some(Command::Take {
                item: String::new()
            })
        );
    }

    #[test]
    fn blank_input_parses_to_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("\t\n"), None);
    }

    #[test]
    fn unknown_verb_keeps_the_input() {
        assert_eq!(
            parse_command("dance wildly"),
            Some(Command::Unknown {
                input: "dance wildly".to_string()
            })
        );
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_panics_on_arbitrary_input(input in "\\PC*") {
                let _ = parse_command(&input);
            }

            #[test]
            fn first_token_picks_the_verb(noun in "[a-z]{3,8}") {
                prop_assert_eq!(
                    parse_command(&format!("take {noun}")),
                    Some(Command::Take { item: noun })
                );
            }
        }
    }
}
