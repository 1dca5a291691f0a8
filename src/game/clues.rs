//! Progressive clue unlocks
//!
//! Three side-clues gate on the guess counter: each slot carries a fixed
//! unlock threshold and flips to unlocked once the count reaches it.
//! Unlocking is monotonic for the round; revealing an unlocked clue is
//! idempotent and the content stays visible until the round resets.

use crate::core::Entry;
use std::fmt;

/// Unlock thresholds (in guesses) for patch, bond, signature weapon
pub const DEFAULT_THRESHOLDS: [u32; 3] = [3, 6, 9];

/// The three side-clue channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClueKind {
    Patch,
    Bond,
    SignatureWeapon,
}

impl ClueKind {
    /// All kinds in slot order
    pub const ALL: [Self; 3] = [Self::Patch, Self::Bond, Self::SignatureWeapon];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Patch => "Patch Release",
            Self::Bond => "Bond Line",
            Self::SignatureWeapon => "Signature Weapon",
        }
    }

    /// The clue text this channel reveals for an entry
    ///
    /// Falls back to `???` when the entry has no value for the field.
    #[must_use]
    pub fn content(self, entry: &Entry) -> &str {
        let value = match self {
            Self::Patch => &entry.patch,
            Self::Bond => &entry.bond,
            Self::SignatureWeapon => &entry.signature_weapon,
        };
        if value.is_empty() { "???" } else { value }
    }
}

impl fmt::Display for ClueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One clue slot: a channel, its threshold, and its unlock/reveal state
#[derive(Debug, Clone, Copy)]
pub struct ClueSlot {
    kind: ClueKind,
    threshold: u32,
    unlocked: bool,
    revealed: bool,
}

impl ClueSlot {
    #[must_use]
    pub const fn kind(&self) -> ClueKind {
        self.kind
    }

    #[must_use]
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Guesses still needed before this slot unlocks
    #[must_use]
    pub const fn remaining(&self, guess_count: u32) -> u32 {
        self.threshold.saturating_sub(guess_count)
    }
}

/// The round's clue slots
#[derive(Debug, Clone)]
pub struct ClueBoard {
    slots: [ClueSlot; 3],
}

impl Default for ClueBoard {
    fn default() -> Self {
        Self::with_thresholds(DEFAULT_THRESHOLDS)
    }
}

impl ClueBoard {
    /// Build a board with one slot per clue kind, all locked
    #[must_use]
    pub fn with_thresholds(thresholds: [u32; 3]) -> Self {
        let mut index = 0;
        let slots = ClueKind::ALL.map(|kind| {
            let threshold = thresholds[index];
            index += 1;
            ClueSlot {
                kind,
                threshold,
                unlocked: false,
                revealed: false,
            }
        });
        Self { slots }
    }

    /// Unlock every slot whose threshold the count now meets
    ///
    /// Returns the kinds that transitioned this call; already-unlocked slots
    /// never re-lock and are not reported again.
    pub(crate) fn unlock_reached(&mut self, guess_count: u32) -> Vec<ClueKind> {
        let mut newly = Vec::new();
        for slot in &mut self.slots {
            if !slot.unlocked && guess_count >= slot.threshold {
                slot.unlocked = true;
                newly.push(slot.kind);
            }
        }
        newly
    }

    /// Mark an unlocked slot as revealed
    ///
    /// Returns false while the slot is still locked. Revealing twice is a
    /// no-op; the clue stays visible.
    pub fn reveal(&mut self, kind: ClueKind) -> bool {
        let slot = &mut self.slots[Self::index_of(kind)];
        if slot.unlocked {
            slot.revealed = true;
            true
        } else {
            false
        }
    }

    /// Relock and hide everything (round reset)
    pub(crate) fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.unlocked = false;
            slot.revealed = false;
        }
    }

    #[must_use]
    pub fn slots(&self) -> &[ClueSlot] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, kind: ClueKind) -> &ClueSlot {
        &self.slots[Self::index_of(kind)]
    }

    const fn index_of(kind: ClueKind) -> usize {
        match kind {
            ClueKind::Patch => 0,
            ClueKind::Bond => 1,
            ClueKind::SignatureWeapon => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_starts_locked() {
        let board = ClueBoard::default();
        assert!(board.slots().iter().all(|s| !s.is_unlocked() && !s.is_revealed()));
    }

    #[test]
    fn unlock_reports_each_kind_once() {
        let mut board = ClueBoard::with_thresholds([2, 4, 6]);

        assert!(board.unlock_reached(1).is_empty());
        assert_eq!(board.unlock_reached(2), vec![ClueKind::Patch]);
        // Already unlocked: not reported again
        assert!(board.unlock_reached(3).is_empty());
        assert_eq!(
            board.unlock_reached(6),
            vec![ClueKind::Bond, ClueKind::SignatureWeapon]
        );
    }

    #[test]
    fn unlock_is_monotonic() {
        let mut board = ClueBoard::with_thresholds([2, 4, 6]);
        board.unlock_reached(4);

        assert!(board.slot(ClueKind::Patch).is_unlocked());
        assert!(board.slot(ClueKind::Bond).is_unlocked());

        // A lower count later never relocks anything
        board.unlock_reached(1);
        assert!(board.slot(ClueKind::Patch).is_unlocked());
        assert!(board.slot(ClueKind::Bond).is_unlocked());
    }

    #[test]
    fn reveal_requires_unlock() {
        let mut board = ClueBoard::with_thresholds([2, 4, 6]);
        assert!(!board.reveal(ClueKind::Patch));
        assert!(!board.slot(ClueKind::Patch).is_revealed());

        board.unlock_reached(2);
        assert!(board.reveal(ClueKind::Patch));
        assert!(board.slot(ClueKind::Patch).is_revealed());
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut board = ClueBoard::with_thresholds([1, 4, 6]);
        board.unlock_reached(1);

        assert!(board.reveal(ClueKind::Patch));
        assert!(board.reveal(ClueKind::Patch));
        assert!(board.slot(ClueKind::Patch).is_revealed());
    }

    #[test]
    fn reset_relocks_and_hides() {
        let mut board = ClueBoard::with_thresholds([1, 2, 3]);
        board.unlock_reached(3);
        board.reveal(ClueKind::Bond);

        board.reset();
        assert!(board.slots().iter().all(|s| !s.is_unlocked() && !s.is_revealed()));
    }

    #[test]
    fn content_falls_back_for_empty_fields() {
        let mut entry = Entry::new("Alpha", "Sword", "Fire", "X", "M1");
        assert_eq!(ClueKind::Patch.content(&entry), "???");

        entry.patch = "1.0".to_string();
        assert_eq!(ClueKind::Patch.content(&entry), "1.0");
    }

    #[test]
    fn remaining_counts_down_and_clamps() {
        let board = ClueBoard::with_thresholds([3, 6, 9]);
        let slot = board.slot(ClueKind::Patch);
        assert_eq!(slot.remaining(0), 3);
        assert_eq!(slot.remaining(2), 1);
        assert_eq!(slot.remaining(5), 0);
    }
}
