//! CLI frontend for the Fablewright interactive-fiction toolkit.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fw",
    about = "Fablewright — build and play text adventures",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter world file to play with and edit
    New {
        /// Path of the world file to create
        #[arg(short, long, default_value = "adventure.json")]
        world: PathBuf,
    },

    /// Load a world file and report wiring problems
    Check {
        /// Path of the world file
        #[arg(short, long, default_value = "adventure.json")]
        world: PathBuf,
    },

    /// List the rooms and events of a world file
    List {
        /// Path of the world file
        #[arg(short, long, default_value = "adventure.json")]
        world: PathBuf,
    },

    /// Play a world file
    Play {
        /// Path of the world file
        #[arg(short, long, default_value = "adventure.json")]
        world: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New { world } => commands::new::run(&world),
        Commands::Check { world } => commands::check::run(&world),
        Commands::List { world } => commands::list::run(&world),
        Commands::Play { world } => commands::play::run(&world),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
