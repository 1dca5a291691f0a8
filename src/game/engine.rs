//! Guess evaluator and round orchestration
//!
//! `Game` owns the current round and clue board over a borrowed roster, and
//! exposes the three operations the adapters call: `evaluate`, `reset`, and
//! clue reveal. It computes classifications and unlock transitions; callers
//! own rendering.

use crate::core::{Entry, FeedbackRow};
use crate::game::clues::{ClueBoard, ClueKind, ClueSlot};
use crate::game::round::Round;
use crate::roster::Roster;
use rand::Rng;
use std::fmt;

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The guessed entry is the target; the round is solved
    Win,
    /// Keep guessing
    Continue,
}

/// Cosmetic play-mode label; no behavioral divergence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    Daily,
    #[default]
    Endless,
}

impl GameMode {
    /// Parse a mode name; anything unrecognized falls back to endless
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "daily" | "d" => Self::Daily,
            _ => Self::Endless,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Endless => "Endless",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Daily => Self::Endless,
            Self::Endless => Self::Daily,
        }
    }
}

/// Everything the evaluator reports for one accepted guess
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// The canonical roster entry that matched the guess text
    pub entry: Entry,
    /// Per-attribute classification against the target
    pub row: FeedbackRow,
    pub outcome: Outcome,
    /// Guess count after this guess
    pub guess_count: u32,
    /// Clues whose thresholds this guess just met
    pub newly_unlocked: Vec<ClueKind>,
}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The guess text matched no roster entry; round state is untouched
    UnknownEntry(String),
    /// The round is already solved; reset to play again
    RoundOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEntry(name) => write!(f, "no resonator named '{name}'"),
            Self::RoundOver => write!(f, "round already solved; start a new round"),
        }
    }
}

impl std::error::Error for GuessError {}

/// The game engine for one player session
pub struct Game<'a> {
    roster: &'a Roster,
    round: Round,
    clues: ClueBoard,
}

impl<'a> Game<'a> {
    /// Start a session with default clue thresholds and a fresh round
    pub fn new<R: Rng + ?Sized>(roster: &'a Roster, rng: &mut R) -> Self {
        Self::with_clues(roster, ClueBoard::default(), rng)
    }

    /// Start a session with a custom clue board
    pub fn with_clues<R: Rng + ?Sized>(
        roster: &'a Roster,
        clues: ClueBoard,
        rng: &mut R,
    ) -> Self {
        let round = Round::start(roster, rng);
        Self {
            roster,
            round,
            clues,
        }
    }

    /// Evaluate a guess by name against the current round's target
    ///
    /// On success the guess counter increments, due clues unlock, and the
    /// per-attribute feedback row plus win flag come back in the
    /// `Evaluation`. A failed lookup mutates nothing.
    ///
    /// # Errors
    ///
    /// - `GuessError::UnknownEntry` when the name matches no roster entry
    /// - `GuessError::RoundOver` when the round is already solved
    pub fn evaluate(&mut self, guess_name: &str) -> Result<Evaluation, GuessError> {
        if self.round.is_solved() {
            return Err(GuessError::RoundOver);
        }

        let entry = self
            .roster
            .find(guess_name)
            .cloned()
            .ok_or_else(|| GuessError::UnknownEntry(guess_name.trim().to_string()))?;

        let guess_count = self.round.record_guess();
        // Clues unlock before the win check, matching the table/clue order
        // the player sees
        let newly_unlocked = self.clues.unlock_reached(guess_count);
        let row = FeedbackRow::compare(&entry, self.round.target());

        let outcome = if entry.name == self.round.target().name {
            self.round.mark_solved();
            Outcome::Win
        } else {
            Outcome::Continue
        };

        Ok(Evaluation {
            entry,
            row,
            outcome,
            guess_count,
            newly_unlocked,
        })
    }

    /// Discard the round wholesale: new random target, zeroed counter,
    /// all clues relocked
    ///
    /// The new target is drawn independently of the previous one; repeats
    /// are permitted.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.round = Round::start(self.roster, rng);
        self.clues.reset();
    }

    /// Reveal an unlocked clue, returning its text
    ///
    /// Returns `None` while the clue is still locked. Revealing is
    /// idempotent; once revealed the content stays available via
    /// [`Game::clue_content`] until reset.
    pub fn reveal_clue(&mut self, kind: ClueKind) -> Option<String> {
        if self.clues.reveal(kind) {
            Some(kind.content(self.round.target()).to_string())
        } else {
            None
        }
    }

    /// Text of an already-revealed clue, if any
    #[must_use]
    pub fn clue_content(&self, kind: ClueKind) -> Option<&str> {
        if self.clues.slot(kind).is_revealed() {
            Some(kind.content(self.round.target()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn roster(&self) -> &'a Roster {
        self.roster
    }

    #[must_use]
    pub fn clue_slots(&self) -> &[ClueSlot] {
        self.clues.slots()
    }

    #[must_use]
    pub fn guess_count(&self) -> u32 {
        self.round.guess_count()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.round.is_solved()
    }
}
