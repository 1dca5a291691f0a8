//! Resonator-dle - CLI
//!
//! Guessing game with TUI and CLI modes: identify the hidden resonator from
//! per-attribute feedback.

use anyhow::Result;
use clap::{Parser, Subcommand};
use resodle::{
    commands::{run_simple, run_simulation},
    game::GameMode,
    interactive::{App, run_tui},
    output::{print_roster, print_simulation_result},
    roster::{Roster, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "resodle",
    about = "Resonator guessing game with per-attribute feedback and clue unlocks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Roster: 'embedded' (default) or path to a JSON file
    #[arg(short = 'r', long, global = true, default_value = "embedded")]
    roster: String,

    /// Mode label: endless (default) or daily — cosmetic only
    #[arg(short, long, global = true, default_value = "endless")]
    mode: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Play automated rounds and report guess statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print the loaded roster
    Roster,
}

/// Load the roster based on the -r flag
fn load_roster(source: &str) -> Result<Roster> {
    match source {
        "embedded" => Ok(Roster::embedded()),
        path => load_from_file(path),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let roster = load_roster(&cli.roster)?;
    let mode = GameMode::from_name(&cli.mode);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(&roster, mode);
            run_tui(app)
        }
        Commands::Simple => run_simple(&roster, mode).map_err(|e| anyhow::anyhow!(e)),
        Commands::Simulate { rounds, seed } => {
            println!("Simulating {rounds} rounds over {} entries...", roster.len());
            let result = run_simulation(&roster, rounds, seed);
            print_simulation_result(&result);
            Ok(())
        }
        Commands::Roster => {
            print_roster(&roster);
            Ok(())
        }
    }
}
