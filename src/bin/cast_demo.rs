//! Cast "fire" and then "heal" at a player and a horde of enemies.
//!
//! Usage: `cast_demo [SPELLBOOK.json]`
//!
//! Without an argument the classic spellbook is used. Failed casts (the
//! wall has no `Health`) show up as warnings on the terminal.

use anyhow::{Context, Result};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use spellcast::creatures::{Daemon, Orc, Player, Wall, Zombie};
use spellcast::spells::{cast_to_all, Attributes, Spellbook, Target};

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let book = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading spellbook {}", path))?;
            Spellbook::from_json(&json).with_context(|| format!("loading spellbook {}", path))?
        }
        None => Spellbook::classic(),
    };

    let mut player = Player::new("Player_1", 100);
    let mut enemies: Vec<Box<dyn Attributes>> = vec![
        Box::new(Zombie::new(1000)),
        Box::new(Zombie::new(1000)),
        Box::new(Orc::new(500)),
        Box::new(Orc::new(500)),
        Box::new(Orc::new(500)),
        Box::new(Daemon::new(1000)),
        Box::new(Daemon::new(1000)),
        Box::new(Wall::new(100)),
    ];

    for spell in book.iter() {
        info!("casting {}", spell);
        let targets = enemies
            .iter_mut()
            .map(|enemy| Target::plain(enemy.as_mut()))
            .chain(std::iter::once(Target::receiver(&mut player)));
        let outcomes = cast_to_all(spell, targets);

        let failed = outcomes.iter().filter(|o| o.is_failed()).count();
        info!("{} hit {} targets, {} failed", spell.name(), outcomes.len(), failed);
    }

    println!("{:?}", player);
    for enemy in &enemies {
        println!("{:?}", enemy);
    }

    Ok(())
}
