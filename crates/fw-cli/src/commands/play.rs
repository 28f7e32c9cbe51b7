//! The interactive play loop.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use colored::Colorize;
use fw_engine::Session;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

const PROMPT: &str = "What do you do? (Type 'look' or 'quit') > ";

/// One read from the player, or the end of input.
enum Read {
    Line(String),
    Stop,
}

/// Where player input comes from: a line editor on a terminal, plain
/// buffered reads when stdin is piped.
enum Input {
    Interactive(Box<DefaultEditor>),
    Piped(io::StdinLock<'static>),
}

impl Input {
    fn open() -> Result<Self, String> {
        if io::stdin().is_terminal() {
            let editor =
                DefaultEditor::new().map_err(|e| format!("cannot start line editor: {e}"))?;
            Ok(Self::Interactive(Box::new(editor)))
        } else {
            Ok(Self::Piped(io::stdin().lock()))
        }
    }

    fn read(&mut self, prompt: &str) -> Result<Read, String> {
        match self {
            Self::Interactive(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    Ok(Read::Line(line))
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(Read::Stop),
                Err(e) => Err(format!("cannot read input: {e}")),
            },
            Self::Piped(stdin) => {
                print!("{prompt}");
                let _ = io::stdout().flush();
                let mut line = String::new();
                match stdin.read_line(&mut line) {
                    Ok(0) => Ok(Read::Stop),
                    Ok(_) => Ok(Read::Line(line.trim_end_matches(['\r', '\n']).to_string())),
                    Err(e) => Err(format!("cannot read input: {e}")),
                }
            }
        }
    }
}

/// Load the world and run the interaction loop until the player quits,
/// input ends, or the current room becomes unrenderable.
pub fn run(world_path: &Path) -> Result<(), String> {
    let world = super::load_world(world_path)?;
    let mut session = Session::new(world).map_err(|e| e.to_string())?;
    let mut input = Input::open()?;

    println!("{}", format!("Loaded {}.", world_path.display()).dimmed());
    println!("{}", session.describe_room().map_err(|e| e.to_string())?);

    loop {
        let line = match input.read(PROMPT)? {
            Read::Line(line) => line,
            Read::Stop => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match session.process(line) {
            Ok(turn) => {
                if !turn.message.is_empty() {
                    println!("{}", turn.message);
                }
                if turn.quit {
                    break;
                }
                if turn.moved {
                    match session.describe_room() {
                        Ok(view) => println!("{view}"),
                        Err(e) => {
                            eprintln!("{} {e}", "fatal:".red().bold());
                            break;
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("{} {e}", "fatal:".red().bold());
                break;
            }
        }
    }

    println!();
    println!("*** Game Over. Thanks for playing! ***");
    Ok(())
}
