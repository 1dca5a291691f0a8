//! Automated round simulation
//!
//! Plays many rounds with an elimination player and reports the guess-count
//! distribution. The player guesses uniformly among the entries still
//! consistent with every feedback row observed so far, so each guess prunes
//! the candidate pool.

use crate::core::FeedbackRow;
use crate::game::{Game, Outcome};
use crate::roster::Roster;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a simulation run
pub struct SimulationResult {
    pub total_rounds: usize,
    pub total_guesses: u64,
    pub average_guesses: f64,
    pub min_guesses: u32,
    pub max_guesses: u32,
    pub distribution: HashMap<u32, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play `rounds` automated rounds in parallel
///
/// With a seed the run is reproducible: round `i` uses a generator seeded
/// from `seed + i`.
#[must_use]
pub fn run_simulation(roster: &Roster, rounds: usize, seed: Option<u64>) -> SimulationResult {
    let pb = ProgressBar::new(rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let counts: Vec<u32> = (0..rounds)
        .into_par_iter()
        .map(|i| {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s.wrapping_add(i as u64)),
                None => StdRng::from_os_rng(),
            };
            let count = play_round(roster, &mut rng);
            pb.inc(1);
            count
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution: HashMap<u32, usize> = HashMap::new();
    let mut min_guesses = u32::MAX;
    let mut max_guesses = 0;
    let mut total_guesses = 0u64;

    for &count in &counts {
        total_guesses += u64::from(count);
        min_guesses = min_guesses.min(count);
        max_guesses = max_guesses.max(count);
        *distribution.entry(count).or_insert(0) += 1;
    }

    if counts.is_empty() {
        min_guesses = 0;
    }

    SimulationResult {
        total_rounds: rounds,
        total_guesses,
        average_guesses: if rounds == 0 {
            0.0
        } else {
            total_guesses as f64 / rounds as f64
        },
        min_guesses,
        max_guesses,
        distribution,
        duration,
        rounds_per_second: rounds as f64 / duration.as_secs_f64(),
    }
}

/// Play one round to completion, returning the guess count
///
/// Candidates stay consistent with the target by construction, so the loop
/// always terminates within roster-size guesses.
fn play_round(roster: &Roster, rng: &mut StdRng) -> u32 {
    let mut game = Game::new(roster, rng);
    let mut candidates: Vec<usize> = (0..roster.len()).collect();

    loop {
        let pick = candidates[rng.random_range(0..candidates.len())];
        let guess_name = roster.entries()[pick].name.clone();

        let eval = game
            .evaluate(&guess_name)
            .expect("candidate names come from the roster");

        if eval.outcome == Outcome::Win {
            return eval.guess_count;
        }

        // Keep only entries that would have produced the observed feedback
        candidates.retain(|&i| {
            let candidate = &roster.entries()[i];
            candidate.name != eval.entry.name
                && FeedbackRow::compare(&eval.entry, candidate) == eval.row
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entry;

    fn roster() -> Roster {
        Roster::new(vec![
            Entry::new("Jiyan", "Broadblade", "Aero", "Huanglong", "M1"),
            Entry::new("Yinlin", "Rectifier", "Electro", "Huanglong", "M2"),
            Entry::new("Jinhsi", "Broadblade", "Spectro", "Huanglong", "M3"),
            Entry::new("Changli", "Sword", "Fusion", "Huanglong", "M4"),
            Entry::new("Carlotta", "Pistols", "Glacio", "Rinascita", "M5"),
        ])
        .unwrap()
    }

    #[test]
    fn every_round_solves_within_roster_size() {
        let roster = roster();
        let result = run_simulation(&roster, 40, Some(42));

        assert_eq!(result.total_rounds, 40);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= roster.len() as u32);
    }

    #[test]
    fn distribution_sums_to_round_count() {
        let roster = roster();
        let result = run_simulation(&roster, 25, Some(7));

        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, 25);
    }

    #[test]
    fn average_sits_between_min_and_max() {
        let roster = roster();
        let result = run_simulation(&roster, 30, Some(1));

        assert!(result.average_guesses >= f64::from(result.min_guesses));
        assert!(result.average_guesses <= f64::from(result.max_guesses));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let roster = roster();
        let a = run_simulation(&roster, 15, Some(99));
        let b = run_simulation(&roster, 15, Some(99));

        assert_eq!(a.total_guesses, b.total_guesses);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn single_entry_roster_always_wins_first_guess() {
        let roster = Roster::new(vec![Entry::new("Solo", "Sword", "Fire", "X", "M")]).unwrap();
        let result = run_simulation(&roster, 10, Some(0));

        assert_eq!(result.min_guesses, 1);
        assert_eq!(result.max_guesses, 1);
    }

    #[test]
    fn zero_rounds_is_harmless() {
        let roster = roster();
        let result = run_simulation(&roster, 0, Some(0));

        assert_eq!(result.total_rounds, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }
}
