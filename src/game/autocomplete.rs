//! Autocomplete filter for guess input
//!
//! Filters the roster down to entries whose name contains the typed text as a
//! case-insensitive substring; an empty query keeps the full roster in its
//! original order. The selection cursor clamps at both ends — no wraparound.

use crate::roster::Roster;

/// Filtered suggestion list with a keyboard selection cursor
///
/// Holds positions into the roster rather than entry references, so the UI
/// can keep it alongside a mutable game without borrow juggling.
#[derive(Debug, Clone, Default)]
pub struct Suggestions {
    matches: Vec<usize>,
    cursor: Option<usize>,
}

impl Suggestions {
    /// Filter the roster by a query substring
    #[must_use]
    pub fn filter(roster: &Roster, query: &str) -> Self {
        let q = query.trim().to_lowercase();
        let matches = roster
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| q.is_empty() || entry.name.to_lowercase().contains(&q))
            .map(|(i, _)| i)
            .collect();
        Self {
            matches,
            cursor: None,
        }
    }

    /// Move the cursor down one item, clamping at the last
    pub fn move_down(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        let last = self.matches.len() - 1;
        self.cursor = Some(match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    /// Move the cursor up one item, clamping at the first
    pub fn move_up(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            None => 0,
            Some(i) => i.saturating_sub(1),
        });
    }

    /// Roster position of the item under the cursor
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.cursor.and_then(|i| self.matches.get(i).copied())
    }

    /// Roster position of the first match
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.matches.first().copied()
    }

    /// Cursor position within the match list (not the roster)
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Roster positions of all matches, in roster order
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.matches
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
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
        ])
        .unwrap()
    }

    #[test]
    fn empty_query_yields_full_roster_in_order() {
        let roster = roster();
        let suggestions = Suggestions::filter(&roster, "");
        assert_eq!(suggestions.indices(), [0, 1, 2, 3]);
    }

    #[test]
    fn whitespace_query_is_treated_as_empty() {
        let roster = roster();
        let suggestions = Suggestions::filter(&roster, "   ");
        assert_eq!(suggestions.len(), 4);
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let roster = roster();
        let suggestions = Suggestions::filter(&roster, "JI");
        // Jiyan and Jinhsi both contain "ji"
        assert_eq!(suggestions.indices(), [0, 2]);
    }

    #[test]
    fn substring_matches_anywhere_in_name() {
        let roster = roster();
        let suggestions = Suggestions::filter(&roster, "lin");
        assert_eq!(suggestions.indices(), [1]);
    }

    #[test]
    fn no_match_yields_empty_list() {
        let roster = roster();
        let suggestions = Suggestions::filter(&roster, "zzz");
        assert!(suggestions.is_empty());
        assert!(suggestions.selected().is_none());
        assert!(suggestions.first().is_none());
    }

    #[test]
    fn cursor_starts_unset_and_first_move_selects_first() {
        let roster = roster();
        let mut suggestions = Suggestions::filter(&roster, "");
        assert!(suggestions.cursor().is_none());

        suggestions.move_down();
        assert_eq!(suggestions.cursor(), Some(0));
        assert_eq!(suggestions.selected(), Some(0));
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let roster = roster();
        let mut suggestions = Suggestions::filter(&roster, "ji");
        assert_eq!(suggestions.len(), 2);

        // Down past the end clamps at the last item
        for _ in 0..5 {
            suggestions.move_down();
        }
        assert_eq!(suggestions.cursor(), Some(1));

        // Up past the start clamps at the first item
        for _ in 0..5 {
            suggestions.move_up();
        }
        assert_eq!(suggestions.cursor(), Some(0));
    }

    #[test]
    fn moves_on_empty_list_are_ignored() {
        let roster = roster();
        let mut suggestions = Suggestions::filter(&roster, "zzz");
        suggestions.move_down();
        suggestions.move_up();
        assert!(suggestions.cursor().is_none());
    }
}
