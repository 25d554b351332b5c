//! Spell casting - applying spells to targets.
//!
//! Casting resolves in two tiers:
//!
//! 1. **Receiver**: targets implementing `CastReceiver` get the spell and
//!    own everything that happens next. This includes plain targets whose
//!    `Attributes::as_receiver` returns a receiver.
//! 2. **Attributes**: remaining plain targets are searched for an attribute
//!    named by the spell; integer attributes get the magnitude added in place.
//!
//! Casting never returns an error to production callers. Failures are
//! logged and reported as a `CastOutcome`, which tests inspect and
//! everyone else is free to drop.

use std::fmt;

use log::{debug, trace, warn};
use thiserror::Error;

use super::attributes::{AttributeKind, AttributeSlot, Attributes};
use super::spell::Spell;

/// Capability for targets that interpret spells themselves.
///
/// Implementors may ignore spells they don't recognize.
pub trait CastReceiver {
    /// Receive a spell.
    fn receive_spell(&mut self, spell: &Spell);
}

/// A target for a cast, resolved once when the caller builds it.
pub enum Target<'a> {
    /// Interprets the spell itself.
    Receiver(&'a mut dyn CastReceiver),
    /// Exposes named attributes for the caster to modify.
    Plain(&'a mut dyn Attributes),
}

impl<'a> Target<'a> {
    /// Wrap a receiver-capable target.
    pub fn receiver(target: &'a mut dyn CastReceiver) -> Self {
        Target::Receiver(target)
    }

    /// Wrap a plain-attribute target.
    pub fn plain(target: &'a mut dyn Attributes) -> Self {
        Target::Plain(target)
    }
}

impl fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Receiver(_) => f.write_str("Target::Receiver(..)"),
            Target::Plain(target) => f.debug_tuple("Target::Plain").field(target).finish(),
        }
    }
}

/// Why a spell could not be applied to a plain target.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CastError {
    /// The attribute is missing or not exposed by the target.
    #[error("attribute {attribute} not found or cannot be set in object {target}")]
    AttributeNotFound {
        attribute: String,
        /// `Debug` representation of the target.
        target: String,
    },

    /// The attribute exists but is not an integer.
    #[error("cannot apply spell to attribute {attribute}: unsupported kind {kind}")]
    UnsupportedKind {
        attribute: String,
        kind: AttributeKind,
    },
}

/// Result of casting a spell on one target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CastOutcome {
    /// Handed to the target's `CastReceiver`.
    Received,
    /// Magnitude added to an integer attribute.
    Applied {
        attribute: String,
        before: i64,
        after: i64,
    },
    /// Nothing changed; a diagnostic was logged.
    Failed(CastError),
}

impl CastOutcome {
    /// Check if an attribute was modified.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, CastOutcome::Applied { .. })
    }

    /// Check if the cast failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, CastOutcome::Failed(_))
    }

    /// Failure reason, if any.
    #[must_use]
    pub fn error(&self) -> Option<&CastError> {
        match self {
            CastOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Cast a spell on every target, in order.
///
/// Each target is processed exactly once. A failure on one target has no
/// effect on the others.
pub fn cast_to_all<'a>(
    spell: &Spell,
    targets: impl IntoIterator<Item = Target<'a>>,
) -> Vec<CastOutcome> {
    targets
        .into_iter()
        .map(|target| cast_to(spell, target))
        .collect()
}

/// Cast a spell on a single target.
pub fn cast_to(spell: &Spell, target: Target<'_>) -> CastOutcome {
    match target {
        Target::Receiver(receiver) => cast_to_receiver(spell, receiver),
        Target::Plain(object) => match object.as_receiver() {
            Some(receiver) => cast_to_receiver(spell, receiver),
            None => cast_to_attributes(spell, object),
        },
    }
}

fn cast_to_receiver(spell: &Spell, receiver: &mut dyn CastReceiver) -> CastOutcome {
    trace!("{} handed to receiver", spell);
    receiver.receive_spell(spell);
    CastOutcome::Received
}

fn cast_to_attributes(spell: &Spell, object: &mut dyn Attributes) -> CastOutcome {
    let attribute = spell.attribute();

    let result = match object.attribute(attribute) {
        Some(slot) => apply_to_slot(spell, slot),
        None => Err(None),
    };

    match result {
        Ok((before, after)) => {
            debug!("{} applied: {} {} -> {}", spell, attribute, before, after);
            CastOutcome::Applied {
                attribute: attribute.to_string(),
                before,
                after,
            }
        }
        Err(kind) => {
            let err = match kind {
                None => CastError::AttributeNotFound {
                    attribute: attribute.to_string(),
                    target: format!("{:?}", object),
                },
                Some(kind) => CastError::UnsupportedKind {
                    attribute: attribute.to_string(),
                    kind,
                },
            };
            warn!("{}", err);
            CastOutcome::Failed(err)
        }
    }
}

/// Add the magnitude to an integer slot.
///
/// Returns `(before, after)`, or the slot's kind if it isn't an integer.
fn apply_to_slot(
    spell: &Spell,
    slot: AttributeSlot<'_>,
) -> Result<(i64, i64), Option<AttributeKind>> {
    match slot {
        AttributeSlot::Int(value) => {
            let before = *value;
            *value = before.wrapping_add(spell.magnitude());
            Ok((before, *value))
        }
        other => Err(Some(other.kind())),
    }
}
