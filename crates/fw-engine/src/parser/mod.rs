//! Command parsing and input suggestions.

mod command;
mod resolver;

pub use command::{Command, parse_command};
pub use resolver::{closest, suggest_verb};
