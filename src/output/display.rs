//! Display functions for command results

use crate::commands::SimulationResult;
use crate::roster::Roster;
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(u32, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();

    for (guesses, count) in counts {
        let pct = (count as f64 / result.total_rounds as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {guesses:2}: {bar} {count:4} ({pct:5.1}%)");
    }
    println!();
}

/// Print the loaded roster as a table
pub fn print_roster(roster: &Roster) {
    println!("\n{}", "─".repeat(78).cyan());
    println!(
        " Roster: {} entries",
        roster.len().to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(78).cyan());

    println!(
        "{}",
        format!(
            "{:<14} {:<12} {:<10} {:<16} {:<8}",
            "Resonator", "Weapon", "Attribute", "Nation", "Patch"
        )
        .bright_cyan()
        .bold()
    );

    for entry in roster.entries() {
        let patch = if entry.patch.is_empty() {
            "—"
        } else {
            &entry.patch
        };
        println!(
            "{} {:<12} {:<10} {:<16} {patch:<8}",
            format!("{:<14}", entry.name).bright_white(),
            entry.weapon,
            entry.attribute,
            entry.nation,
        );
    }
    println!();
}
