//! Resonator-dle
//!
//! A terminal guessing game: identify the hidden resonator from
//! per-attribute feedback, with side-clues that unlock as guesses accumulate.
//!
//! # Quick Start
//!
//! ```rust
//! use resodle::game::{Game, Outcome};
//! use resodle::roster::Roster;
//!
//! let roster = Roster::embedded();
//! let mut rng = rand::rng();
//! let mut game = Game::new(&roster, &mut rng);
//!
//! // Lookup is case-insensitive; feedback comes back per attribute
//! let eval = game.evaluate("jiyan").unwrap();
//! assert!(matches!(eval.outcome, Outcome::Win | Outcome::Continue));
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Roster dataset
pub mod roster;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
