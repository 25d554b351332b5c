//! Spell definitions.
//!
//! A spell is an immutable named magnitude aimed at one attribute of
//! whatever it is cast on. It carries no knowledge of its targets -
//! receivers and attribute tables give the attribute name its meaning.

use serde::{Deserialize, Serialize};

/// An immutable spell.
///
/// ## Fields
///
/// - `name`: label for display and spellbook lookup, never interpreted
/// - `attribute`: which target attribute the spell affects (case-sensitive)
/// - `magnitude`: signed delta added to that attribute
///
/// Spells are built once and shared read-only across any number of casts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spell {
    name: String,
    attribute: String,
    magnitude: i64,
}

impl Spell {
    /// Create a new spell.
    pub fn new(name: impl Into<String>, attribute: impl Into<String>, magnitude: i64) -> Self {
        Self {
            name: name.into(),
            attribute: attribute.into(),
            magnitude,
        }
    }

    /// Create a spell that lowers `attribute` by `amount`.
    pub fn harm(name: impl Into<String>, attribute: impl Into<String>, amount: i64) -> Self {
        Self::new(name, attribute, amount.wrapping_neg())
    }

    /// Spell name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the attribute this spell targets.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Signed delta applied to the attribute.
    #[must_use]
    pub fn magnitude(&self) -> i64 {
        self.magnitude
    }
}

impl std::fmt::Display for Spell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({} {:+})", self.name, self.attribute, self.magnitude)
    }
}
