//! Game engine: round lifecycle, guess evaluation, clue unlocks, autocomplete
//!
//! The engine is UI-independent; the CLI and TUI adapters consume its outputs
//! and own all presentation.

mod autocomplete;
mod clues;
mod engine;
mod round;

pub use autocomplete::Suggestions;
pub use clues::{ClueBoard, ClueKind, ClueSlot, DEFAULT_THRESHOLDS};
pub use engine::{Evaluation, Game, GameMode, GuessError, Outcome};
pub use round::Round;
