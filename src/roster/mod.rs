//! Resonator roster
//!
//! The roster is the ordered dataset of guessable entries, with a
//! case-insensitive name index for guess lookup. An embedded default roster
//! ships in the binary; custom rosters load from JSON files.

mod embedded;
pub mod loader;

pub use embedded::DEFAULT_ROSTER_JSON;

use crate::core::Entry;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for roster construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The supplied entry list was empty; no round can start
    Empty,
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "roster contains no entries"),
        }
    }
}

impl std::error::Error for RosterError {}

/// Ordered collection of guessable entries
///
/// Name uniqueness is assumed, not enforced; if duplicates slip in, the first
/// occurrence wins lookups.
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<Entry>,
    by_name: FxHashMap<String, usize>,
}

impl Roster {
    /// Build a roster from an entry list, preserving order
    ///
    /// # Errors
    /// Returns `RosterError::Empty` if the list is empty.
    pub fn new(entries: Vec<Entry>) -> Result<Self, RosterError> {
        if entries.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut by_name = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            by_name.entry(entry.key()).or_insert(i);
        }

        Ok(Self { entries, by_name })
    }

    /// The default roster compiled into the binary
    ///
    /// # Panics
    /// Will not panic - the embedded JSON is fixed at compile time and
    /// validated by tests.
    #[must_use]
    pub fn embedded() -> Self {
        loader::parse_roster(DEFAULT_ROSTER_JSON).expect("embedded roster is valid and non-empty")
    }

    /// Look up an entry by name, case-insensitively
    ///
    /// Leading and trailing whitespace in the query is ignored.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// All entries in original order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entry at a position in the original order
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick an entry uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Entry {
        // Non-empty by construction
        &self.entries[rng.random_range(0..self.entries.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Roster {
        Roster::new(vec![
            Entry::new("Alpha", "Sword", "Fire", "X", "M1"),
            Entry::new("Beta", "Bow", "Ice", "Y", "M2"),
            Entry::new("Xiangli Yao", "Gauntlets", "Electro", "Huanglong", "M3"),
        ])
        .unwrap()
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert!(matches!(Roster::new(Vec::new()), Err(RosterError::Empty)));
    }

    #[test]
    fn find_is_case_insensitive() {
        let roster = sample();
        assert_eq!(roster.find("alpha").unwrap().name, "Alpha");
        assert_eq!(roster.find("ALPHA").unwrap().name, "Alpha");
        assert_eq!(roster.find("xiangli yao").unwrap().name, "Xiangli Yao");
    }

    #[test]
    fn find_trims_whitespace() {
        let roster = sample();
        assert_eq!(roster.find("  beta  ").unwrap().name, "Beta");
    }

    #[test]
    fn find_unknown_name_returns_none() {
        let roster = sample();
        assert!(roster.find("Gamma").is_none());
        assert!(roster.find("").is_none());
    }

    #[test]
    fn entries_preserve_order() {
        let roster = sample();
        let names: Vec<&str> = roster.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta", "Xiangli Yao"]);
    }

    #[test]
    fn choose_stays_in_roster() {
        let roster = sample();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = roster.choose(&mut rng);
            assert!(roster.find(&picked.name).is_some());
        }
    }

    #[test]
    fn embedded_roster_loads() {
        let roster = Roster::embedded();
        assert!(!roster.is_empty());
    }

    #[test]
    fn embedded_roster_names_are_unique() {
        let roster = Roster::embedded();
        let mut keys: Vec<String> = roster.entries().iter().map(Entry::key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), roster.len());
    }

    #[test]
    fn embedded_roster_compared_fields_are_nonempty() {
        for entry in Roster::embedded().entries() {
            assert!(!entry.name.is_empty());
            assert!(!entry.weapon.is_empty());
            assert!(!entry.attribute.is_empty());
            assert!(!entry.nation.is_empty());
            assert!(!entry.boss_material.is_empty());
        }
    }
}
