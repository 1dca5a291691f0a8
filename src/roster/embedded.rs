//! Embedded default roster
//!
//! The stock resonator roster compiled into the binary.

/// Default roster as JSON, parsed lazily by `Roster::embedded`
pub const DEFAULT_ROSTER_JSON: &str = include_str!("../../data/resonators.json");
