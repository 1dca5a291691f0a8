//! Formatting utilities for terminal output

use crate::core::{Classification, Entry, FeedbackRow};
use crate::game::ClueSlot;
use colored::{ColoredString, Colorize};

/// Result table column widths: resonator, weapon, attribute, nation,
/// boss material
pub const COLUMN_WIDTHS: [usize; 5] = [14, 12, 10, 16, 28];

/// Color a value by its classification
#[must_use]
pub fn paint(value: &str, class: Classification) -> ColoredString {
    match class {
        Classification::Correct => value.bright_green().bold(),
        Classification::Partial => value.yellow(),
        Classification::Wrong => value.red(),
    }
}

/// Emoji square for a classification
#[must_use]
pub const fn symbol(class: Classification) -> &'static str {
    match class {
        Classification::Correct => "🟩",
        Classification::Partial => "🟨",
        Classification::Wrong => "🟥",
    }
}

/// Format a feedback row as five emoji squares
#[must_use]
pub fn row_to_emoji(row: &FeedbackRow) -> String {
    row.cells().iter().map(|&c| symbol(c)).collect()
}

/// Format the result table header
#[must_use]
pub fn header_row() -> String {
    let titles = ["Resonator", "Weapon", "Attribute", "Nation", "Boss Material"];
    let cells: Vec<String> = titles
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(title, width)| format!("{title:<width$}"))
        .collect();
    cells.join(" │ ").bright_cyan().bold().to_string()
}

/// Format one guess as a colored result row
///
/// Padding happens before coloring so ANSI codes don't skew the columns.
#[must_use]
pub fn format_feedback_row(entry: &Entry, row: &FeedbackRow) -> String {
    let values = [
        entry.name.as_str(),
        entry.weapon.as_str(),
        entry.attribute.as_str(),
        entry.nation.as_str(),
        entry.boss_material.as_str(),
    ];

    let cells: Vec<String> = values
        .iter()
        .zip(row.cells())
        .zip(COLUMN_WIDTHS)
        .map(|((value, class), width)| {
            let padded = format!("{value:<width$}");
            paint(&padded, class).to_string()
        })
        .collect();

    cells.join(" │ ")
}

/// Format a clue slot's status line
///
/// `content` is the revealed text, when the slot has been revealed.
#[must_use]
pub fn clue_status(slot: &ClueSlot, guess_count: u32, content: Option<&str>) -> String {
    let label = slot.kind().label();
    if let Some(text) = content {
        format!("🔓 {label}: {text}")
    } else if slot.is_unlocked() {
        format!("🔑 {label} (ready)")
    } else {
        let remaining = slot.remaining(guess_count);
        format!("🔒 {label} (unlocks in {remaining} guesses)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ClueBoard, ClueKind};

    #[test]
    fn symbols_cover_all_classifications() {
        assert_eq!(symbol(Classification::Correct), "🟩");
        assert_eq!(symbol(Classification::Partial), "🟨");
        assert_eq!(symbol(Classification::Wrong), "🟥");
    }

    #[test]
    fn row_to_emoji_renders_five_cells() {
        let alpha = Entry::new("Alpha", "Sword", "Fire", "X", "M1");
        let row = FeedbackRow::compare(&alpha, &alpha);
        assert_eq!(row_to_emoji(&row), "🟩🟩🟩🟩🟩");

        let beta = Entry::new("Beta", "Bow", "Ice", "Y", "M2");
        let row = FeedbackRow::compare(&beta, &alpha);
        assert_eq!(row_to_emoji(&row), "🟥🟥🟥🟥🟥");
    }

    #[test]
    fn clue_status_locked_shows_countdown() {
        let board = ClueBoard::with_thresholds([3, 6, 9]);
        let line = clue_status(board.slot(ClueKind::Patch), 1, None);
        assert!(line.contains("Patch Release"));
        assert!(line.contains("unlocks in 2"));
    }

    #[test]
    fn clue_status_ready_and_revealed() {
        let mut board = ClueBoard::with_thresholds([1, 6, 9]);
        board.unlock_reached(1);

        let ready = clue_status(board.slot(ClueKind::Patch), 1, None);
        assert!(ready.contains("ready"));

        board.reveal(ClueKind::Patch);
        let revealed = clue_status(board.slot(ClueKind::Patch), 1, Some("1.0"));
        assert!(revealed.contains("Patch Release: 1.0"));
    }

    #[test]
    fn format_feedback_row_pads_every_column() {
        colored::control::set_override(false);
        let alpha = Entry::new("Alpha", "Sword", "Fire", "X", "M1");
        let row = FeedbackRow::compare(&alpha, &alpha);
        let line = format_feedback_row(&alpha, &row);

        let widths: usize = COLUMN_WIDTHS.iter().sum();
        // Four separators of " │ " (3 chars each)
        assert_eq!(line.chars().count(), widths + 4 * 3);
        colored::control::unset_override();
    }
}
