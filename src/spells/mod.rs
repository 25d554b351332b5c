//! Spell system: casting named spells on arbitrary targets.
//!
//! - `Spell`: immutable name, attribute, and magnitude
//! - `CastReceiver`: capability for targets that interpret spells themselves
//! - `Attributes` / `AttributeTable`: name-based attribute access for plain targets
//! - `cast_to` / `cast_to_all`: two-tier dispatch with logged failures
//! - `Spellbook`: named spell configuration
//!
//! ## Design Philosophy
//!
//! Targets pick their tier when they are wrapped in a `Target`, so casting
//! never guesses at an object's shape. Plain targets only expose what they
//! list in their attribute table; everything else is unreachable.

mod attributes;
mod book;
mod cast;
mod spell;

pub use attributes::{Accessor, AttributeKind, AttributeSlot, AttributeTable, Attributes};
pub use book::{Spellbook, SpellbookError};
pub use cast::{cast_to, cast_to_all, CastError, CastOutcome, CastReceiver, Target};
pub use spell::Spell;
