//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with no game-state
//! dependencies. All types here are pure and directly testable.

mod entry;
mod feedback;

pub use entry::Entry;
pub use feedback::{Classification, FeedbackRow};
