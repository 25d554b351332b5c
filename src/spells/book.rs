//! Spellbook configuration.
//!
//! A spellbook is a named collection of spells, built in code with
//! `with_spell` or loaded from JSON:
//!
//! ```json
//! {
//!   "spells": [
//!     { "name": "fire", "attribute": "Health", "magnitude": -50 },
//!     { "name": "heal", "attribute": "Health", "magnitude": 190 }
//!   ]
//! }
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::spell::Spell;

/// Errors from loading a spellbook.
#[derive(Debug, Error)]
pub enum SpellbookError {
    /// The input was not a valid spellbook document.
    #[error("failed to parse spellbook: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two spells share a name.
    #[error("duplicate spell {0:?} in spellbook")]
    DuplicateSpell(String),
}

/// Named spells in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spellbook {
    spells: Vec<Spell>,
}

impl Spellbook {
    /// Create an empty spellbook.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The two spells of the classic demo: "fire" and "heal".
    #[must_use]
    pub fn classic() -> Self {
        Self::new()
            .with_spell(Spell::harm("fire", "Health", 50))
            .with_spell(Spell::new("heal", "Health", 190))
    }

    /// Add a spell, replacing any existing spell with the same name.
    #[must_use]
    pub fn with_spell(mut self, spell: Spell) -> Self {
        match self.spells.iter_mut().find(|s| s.name() == spell.name()) {
            Some(existing) => *existing = spell,
            None => self.spells.push(spell),
        }
        self
    }

    /// Load a spellbook from JSON.
    ///
    /// Spell names must be unique.
    pub fn from_json(json: &str) -> Result<Self, SpellbookError> {
        let book: Spellbook = serde_json::from_str(json)?;

        let mut seen = FxHashSet::default();
        for spell in &book.spells {
            if !seen.insert(spell.name()) {
                return Err(SpellbookError::DuplicateSpell(spell.name().to_string()));
            }
        }

        Ok(book)
    }

    /// Get a spell by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Spell> {
        self.spells.iter().find(|s| s.name() == name)
    }

    /// Iterate over spells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Spell> {
        self.spells.iter()
    }

    /// Number of spells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spells.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}
