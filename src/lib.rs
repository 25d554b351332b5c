//! # spellcast
//!
//! Cast named spells on objects whose shape the caster doesn't know.
//!
//! ## Design Principles
//!
//! 1. **Capability First**: Targets that implement `CastReceiver` own the
//!    spell entirely. The caster never looks at their attributes.
//!
//! 2. **Explicit Attributes**: Plain targets list their castable attributes
//!    in an `AttributeTable`. There is no runtime reflection; anything not
//!    listed is unreachable.
//!
//! 3. **Best Effort**: Casting never propagates an error. Failures are
//!    logged and returned as `CastOutcome` values for tests to inspect.
//!
//! ## Modules
//!
//! - `spells`: Spells, targets, two-tier casting, spellbooks
//! - `creatures`: Example targets (player, monsters, wall)
//! - `testequal`: Equality assertions for tests
//!
//! ## Example
//!
//! ```
//! use spellcast::creatures::{Player, Wall, Zombie};
//! use spellcast::spells::{cast_to_all, Spell, Target};
//!
//! let mut player = Player::new("Player_1", 100);
//! let mut zombie = Zombie::new(1000);
//! let mut wall = Wall::new(100);
//!
//! let outcomes = cast_to_all(
//!     &Spell::new("fire", "Health", -50),
//!     [
//!         Target::plain(&mut zombie),
//!         Target::plain(&mut wall),
//!         Target::receiver(&mut player),
//!     ],
//! );
//!
//! assert!(outcomes[0].is_applied());
//! assert!(outcomes[1].is_failed());
//! assert_eq!(zombie.health, 950);
//! assert_eq!(wall.durability, 100);
//! assert_eq!(player.health(), 50);
//! ```

pub mod creatures;
pub mod spells;
pub mod testequal;

// Re-export commonly used types
pub use crate::spells::{
    cast_to, cast_to_all, AttributeKind, AttributeSlot, AttributeTable, Attributes, CastError,
    CastOutcome, CastReceiver, Spell, Spellbook, SpellbookError, Target,
};
