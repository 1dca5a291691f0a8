//! Per-attribute feedback classification
//!
//! Each accepted guess is compared field by field against the target,
//! producing a three-way classification per field:
//! - `Correct`: exact, case-sensitive equality
//! - `Partial`: one value is a case-insensitive substring of the other
//!   (covers compound values, e.g. a weapon subtype inside another)
//! - `Wrong`: anything else

use super::Entry;

/// Three-way feedback value for a single attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Correct,
    Partial,
    Wrong,
}

impl Classification {
    /// Classify a guessed value against the target's value
    ///
    /// Exact equality wins first, so two empty strings classify `Correct`.
    /// The partial rule only applies when neither value is empty.
    ///
    /// # Examples
    /// ```
    /// use resodle::core::Classification;
    ///
    /// assert_eq!(Classification::of("Sword", "Sword"), Classification::Correct);
    /// assert_eq!(Classification::of("Sword", "Broadsword"), Classification::Partial);
    /// assert_eq!(Classification::of("Sword", "Bow"), Classification::Wrong);
    /// ```
    #[must_use]
    pub fn of(guessed: &str, target: &str) -> Self {
        if guessed == target {
            return Self::Correct;
        }

        if !guessed.is_empty() && !target.is_empty() {
            let g = guessed.to_lowercase();
            let t = target.to_lowercase();
            if g.contains(&t) || t.contains(&g) {
                return Self::Partial;
            }
        }

        Self::Wrong
    }

    /// Check for an exact match
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Feedback for one guess: a classification per tracked attribute
///
/// Field order matches the result table columns: resonator identity, weapon,
/// attribute, nation, boss material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackRow {
    pub name: Classification,
    pub weapon: Classification,
    pub attribute: Classification,
    pub nation: Classification,
    pub boss_material: Classification,
}

impl FeedbackRow {
    /// Compare a guessed entry against the target, field by field
    ///
    /// Both entries are canonical roster records, so the identity field uses
    /// the same exact-equality rule as the other columns.
    #[must_use]
    pub fn compare(guess: &Entry, target: &Entry) -> Self {
        Self {
            name: Classification::of(&guess.name, &target.name),
            weapon: Classification::of(&guess.weapon, &target.weapon),
            attribute: Classification::of(&guess.attribute, &target.attribute),
            nation: Classification::of(&guess.nation, &target.nation),
            boss_material: Classification::of(&guess.boss_material, &target.boss_material),
        }
    }

    /// All five classifications in display order
    #[must_use]
    pub const fn cells(&self) -> [Classification; 5] {
        [
            self.name,
            self.weapon,
            self.attribute,
            self.nation,
            self.boss_material,
        ]
    }

    /// True when every tracked attribute matched exactly
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.cells().iter().all(|c| c.is_correct())
    }
}
