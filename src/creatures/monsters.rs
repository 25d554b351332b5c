//! Monsters with a single public `Health` attribute.

use std::sync::LazyLock;

use crate::spells::{AttributeSlot, AttributeTable, Attributes};

/// Implements `Attributes` for a monster by forwarding to a static table
/// that exposes `Health`.
macro_rules! health_only {
    ($monster:ident, $table:ident) => {
        static $table: LazyLock<AttributeTable<$monster>> = LazyLock::new(|| {
            AttributeTable::<$monster>::new().with("Health", |m| AttributeSlot::Int(&mut m.health))
        });

        impl $monster {
            /// Create a new monster with the given health.
            #[must_use]
            pub const fn new(health: i64) -> Self {
                Self { health }
            }
        }

        impl Attributes for $monster {
            fn attribute(&mut self, name: &str) -> Option<AttributeSlot<'_>> {
                $table.slot(self, name)
            }

            fn attribute_names(&self) -> Vec<&'static str> {
                $table.names()
            }
        }
    };
}

/// Slow, sturdy undead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zombie {
    pub health: i64,
}

/// Orc warrior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orc {
    pub health: i64,
}

/// Daemon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Daemon {
    pub health: i64,
}

health_only!(Zombie, ZOMBIE_ATTRIBUTES);
health_only!(Orc, ORC_ATTRIBUTES);
health_only!(Daemon, DAEMON_ATTRIBUTES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_exposed() {
        let mut zombie = Zombie::new(1000);
        assert_eq!(zombie.attribute("Health").and_then(|s| s.as_int()), Some(1000));
        assert!(zombie.attribute("health").is_none());
        assert_eq!(zombie.attribute_names(), vec!["Health"]);

        let mut orc = Orc::new(500);
        if let Some(AttributeSlot::Int(health)) = orc.attribute("Health") {
            *health -= 50;
        }
        assert_eq!(orc.health, 450);

        assert_eq!(Daemon::new(1000).attribute_names(), vec!["Health"]);
    }
}
