//! Roster loading utilities
//!
//! Parses rosters from JSON text or files. A roster file is a JSON array of
//! entry objects using the original field spelling (`bossMaterial`,
//! `signatureWeapon`, `img`).

use super::Roster;
use crate::core::Entry;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a roster from JSON text
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the entry list is empty.
pub fn parse_roster(json: &str) -> Result<Roster> {
    let entries: Vec<Entry> =
        serde_json::from_str(json).context("roster is not a valid JSON entry array")?;
    let roster = Roster::new(entries)?;
    Ok(roster)
}

/// Load a roster from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not contain a valid,
/// non-empty roster.
///
/// # Examples
/// ```no_run
/// use resodle::roster::loader::load_from_file;
///
/// let roster = load_from_file("data/resonators.json").unwrap();
/// println!("Loaded {} entries", roster.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file {}", path.display()))?;
    parse_roster(&content).with_context(|| format!("failed to load roster from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_roster() {
        let json = r#"[
            {"name": "Alpha", "weapon": "Sword", "attribute": "Fire", "nation": "X", "bossMaterial": "M1"},
            {"name": "Beta", "weapon": "Bow", "attribute": "Ice", "nation": "Y", "bossMaterial": "M2"}
        ]"#;

        let roster = parse_roster(json).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.entries()[0].name, "Alpha");
        assert_eq!(roster.entries()[1].boss_material, "M2");
    }

    #[test]
    fn parse_empty_array_fails() {
        assert!(parse_roster("[]").is_err());
    }

    #[test]
    fn parse_malformed_json_fails() {
        assert!(parse_roster("not json").is_err());
        assert!(parse_roster(r#"{"name": "Alpha"}"#).is_err());
    }

    #[test]
    fn parse_entry_missing_required_field_fails() {
        // weapon is required
        let json = r#"[{"name": "Alpha", "attribute": "Fire", "nation": "X", "bossMaterial": "M1"}]"#;
        assert!(parse_roster(json).is_err());
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_from_file("/nonexistent/roster.json").is_err());
    }

    #[test]
    fn embedded_json_parses() {
        let roster = parse_roster(crate::roster::DEFAULT_ROSTER_JSON).unwrap();
        assert!(roster.len() >= 10);
    }
}
