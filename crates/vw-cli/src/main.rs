//! CLI frontend for the Vacuum World simulation.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

use commands::WorldArgs;

#[derive(Parser)]
#[command(
    name = "vw",
    about = "Vacuum World: a robot vacuum, a messy room, and a cat",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the cleaner automatically until the room is clean
    Run {
        #[command(flatten)]
        world: WorldArgs,

        /// Maximum number of turns to play
        #[arg(short, long, default_value = "500")]
        turns: u64,

        /// Head for the dirtiest cell instead of wandering
        #[arg(long)]
        smart: bool,

        /// Show all events (not just summary)
        #[arg(short, long)]
        verbose: bool,

        /// Print final statistics and the event log as JSON
        #[arg(long, conflicts_with = "verbose")]
        json: bool,
    },

    /// Drive the simulation interactively from standard input
    Play {
        #[command(flatten)]
        world: WorldArgs,

        /// Start in goal-seeking mode
        #[arg(long)]
        smart: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            world,
            turns,
            smart,
            verbose,
            json,
        } => commands::run::run(&world, turns, smart, verbose, json),
        Commands::Play { world, smart } => commands::play::run(&world, smart),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
