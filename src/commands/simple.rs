//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::core::FeedbackRow;
use crate::game::{ClueKind, Game, GameMode, GuessError, Outcome};
use crate::output::formatters::{clue_status, format_feedback_row, header_row, row_to_emoji};
use crate::roster::Roster;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(roster: &Roster, mode: GameMode) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Resonator-dle - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("A hidden resonator has been chosen ({} mode).", mode.label());
    println!("Guess by name; each guess shows per-attribute feedback:\n");
    println!("  - {} exact match", "green".bright_green().bold());
    println!("  - {} overlapping value", "yellow".yellow());
    println!("  - {} no match\n", "red".red());
    println!("Commands: 'clues' to list clues, 'reveal <1-3>' to show an unlocked clue,");
    println!("          'new' for a new round, 'quit' to exit\n");

    let mut rng = rand::rng();
    let mut game = Game::new(roster, &mut rng);
    let mut history: Vec<(String, FeedbackRow)> = Vec::new();

    println!("{}", header_row());

    loop {
        let input = get_user_input(&format!("Guess {}", game.guess_count() + 1))?;

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.reset(&mut rng);
                history.clear();
                println!("\n🔄 New round started!\n");
                println!("{}", header_row());
            }
            "clues" | "c" => {
                for slot in game.clue_slots() {
                    let content = game.clue_content(slot.kind());
                    println!("  {}", clue_status(slot, game.guess_count(), content));
                }
                println!();
            }
            cmd if cmd.starts_with("reveal") => {
                match parse_reveal_index(cmd) {
                    Some(index) => {
                        let kind = ClueKind::ALL[index];
                        match game.reveal_clue(kind) {
                            Some(text) => println!("\n🔓 {}: {text}\n", kind.label()),
                            None => println!("\n🔒 {} is still locked.\n", kind.label()),
                        }
                    }
                    None => println!("\nUsage: reveal <1-3>\n"),
                }
            }
            _ => match game.evaluate(&input) {
                Ok(eval) => {
                    println!("{}", format_feedback_row(&eval.entry, &eval.row));

                    for kind in &eval.newly_unlocked {
                        println!(
                            "  {}",
                            format!("🔑 {} clue unlocked — 'reveal' to view.", kind.label())
                                .bright_yellow()
                        );
                    }

                    history.push((eval.entry.name.clone(), eval.row));

                    if eval.outcome == Outcome::Win {
                        print_celebration(&eval.entry.name, &history);

                        match get_user_input("Play again? (yes/no)")?
                            .to_lowercase()
                            .as_str()
                        {
                            "yes" | "y" => {
                                game.reset(&mut rng);
                                history.clear();
                                println!("\n🔄 New round started!\n");
                                println!("{}", header_row());
                            }
                            _ => {
                                println!("\n👋 Thanks for playing!\n");
                                return Ok(());
                            }
                        }
                    }
                }
                Err(GuessError::UnknownEntry(name)) => {
                    println!("{}", format!("❌ No resonator named '{name}'!").red());
                }
                Err(GuessError::RoundOver) => {
                    println!("Round already solved — type 'new' to play again.");
                }
            },
        }
    }
}

fn parse_reveal_index(cmd: &str) -> Option<usize> {
    let arg = cmd.strip_prefix("reveal")?.trim();
    let n: usize = arg.parse().ok()?;
    (1..=ClueKind::ALL.len()).contains(&n).then(|| n - 1)
}

fn print_celebration(name: &str, history: &[(String, FeedbackRow)]) {
    let turns = history.len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "     🎉 ✨  R E S O N A T O R   F O U N D !  ✨ 🎉     "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  The resonator was {} — found in {} {}.",
        name.bright_yellow().bold(),
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, (guess, row)) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            format!("{guess:<14}").bright_white().bold(),
            row_to_emoji(row)
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_index_parses_valid_range() {
        assert_eq!(parse_reveal_index("reveal 1"), Some(0));
        assert_eq!(parse_reveal_index("reveal 3"), Some(2));
        assert_eq!(parse_reveal_index("reveal  2"), Some(1));
    }

    #[test]
    fn reveal_index_rejects_out_of_range() {
        assert_eq!(parse_reveal_index("reveal 0"), None);
        assert_eq!(parse_reveal_index("reveal 4"), None);
        assert_eq!(parse_reveal_index("reveal"), None);
        assert_eq!(parse_reveal_index("reveal x"), None);
    }
}
