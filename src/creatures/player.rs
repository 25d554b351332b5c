use crate::spells::{CastReceiver, Spell};

/// A player character. Interprets spells itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    health: i64,
}

impl Player {
    /// Create a new player.
    pub fn new(name: impl Into<String>, health: i64) -> Self {
        Self {
            name: name.into(),
            health,
        }
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health.
    #[must_use]
    pub fn health(&self) -> i64 {
        self.health
    }
}

impl CastReceiver for Player {
    fn receive_spell(&mut self, spell: &Spell) {
        if spell.attribute() == "Health" {
            self.health = self.health.wrapping_add(spell.magnitude());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_reacts_to_health() {
        let mut player = Player::new("Player_1", 100);
        player.receive_spell(&Spell::new("heal", "Health", 190));
        assert_eq!(player.health(), 290);
    }

    #[test]
    fn test_player_ignores_other_attributes() {
        let mut player = Player::new("Player_1", 100);
        player.receive_spell(&Spell::new("drain", "Mana", -40));
        player.receive_spell(&Spell::new("rename", "name", 1));
        assert_eq!(player.health(), 100);
        assert_eq!(player.name(), "Player_1");
    }
}
