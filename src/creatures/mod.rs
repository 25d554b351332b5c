//! Example spell targets.
//!
//! - `Player`: receiver-capable; reacts only to `"Health"` spells
//! - `Zombie`, `Orc`, `Daemon`: plain targets exposing `"Health"`
//! - `Wall`: plain target exposing only `"Durability"`
//!
//! `Player` keeps its name private, so nothing but its own receiver can
//! touch it.

mod monsters;
mod player;
mod wall;

pub use monsters::{Daemon, Orc, Zombie};
pub use player::Player;
pub use wall::Wall;
