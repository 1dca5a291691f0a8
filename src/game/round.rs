//! Round state
//!
//! A round binds a randomly chosen target to a guess counter and a solved
//! flag. Rounds are replaced wholesale on reset; nothing carries over.

use crate::core::Entry;
use crate::roster::Roster;
use rand::Rng;

/// State of a single round
#[derive(Debug, Clone)]
pub struct Round {
    target: Entry,
    guess_count: u32,
    solved: bool,
}

impl Round {
    /// Start a round with a uniformly random target and a zeroed counter
    pub fn start<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Self {
        Self {
            target: roster.choose(rng).clone(),
            guess_count: 0,
            solved: false,
        }
    }

    pub(crate) fn target(&self) -> &Entry {
        &self.target
    }

    /// Count one accepted guess; returns the new count
    pub(crate) fn record_guess(&mut self) -> u32 {
        self.guess_count += 1;
        self.guess_count
    }

    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }

    /// Accepted guesses so far this round
    #[must_use]
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    /// True once the target has been identified; further guesses are rejected
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn roster() -> Roster {
        Roster::new(vec![
            Entry::new("Alpha", "Sword", "Fire", "X", "M1"),
            Entry::new("Beta", "Bow", "Ice", "Y", "M2"),
        ])
        .unwrap()
    }

    #[test]
    fn start_yields_fresh_state() {
        let roster = roster();
        let mut rng = StdRng::seed_from_u64(1);
        let round = Round::start(&roster, &mut rng);

        assert_eq!(round.guess_count(), 0);
        assert!(!round.is_solved());
        assert!(roster.find(&round.target().name).is_some());
    }

    #[test]
    fn record_guess_increments_by_one() {
        let roster = roster();
        let mut rng = StdRng::seed_from_u64(1);
        let mut round = Round::start(&roster, &mut rng);

        assert_eq!(round.record_guess(), 1);
        assert_eq!(round.record_guess(), 2);
        assert_eq!(round.guess_count(), 2);
    }
}
