//! Roster entry representation
//!
//! An Entry is one guessable resonator with the attributes the game compares,
//! plus the side-clue fields revealed on unlock.

use serde::Deserialize;
use std::fmt;

/// A guessable roster entry
///
/// `name` is the unique key; lookups treat it case-insensitively. The clue
/// fields (`patch`, `bond`, `signature_weapon`) and the image reference are
/// optional in roster files and default to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub name: String,
    pub weapon: String,
    pub attribute: String,
    pub nation: String,
    pub boss_material: String,
    #[serde(default)]
    pub patch: String,
    #[serde(default)]
    pub bond: String,
    #[serde(default)]
    pub signature_weapon: String,
    #[serde(default, rename = "img")]
    pub image: String,
}

impl Entry {
    /// Create an entry with only the compared attributes set
    ///
    /// Clue fields and the image reference start empty.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        weapon: impl Into<String>,
        attribute: impl Into<String>,
        nation: impl Into<String>,
        boss_material: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            weapon: weapon.into(),
            attribute: attribute.into(),
            nation: nation.into(),
            boss_material: boss_material.into(),
            patch: String::new(),
            bond: String::new(),
            signature_weapon: String::new(),
            image: String::new(),
        }
    }

    /// The case-insensitive lookup key for this entry
    #[must_use]
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
