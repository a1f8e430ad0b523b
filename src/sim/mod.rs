//! Gameplay simulation: player kinematics, the item/bomb/particle pools,
//! and the `World` struct that bundles them for the frame driver.

pub mod entities;
pub mod player;
pub mod state;

pub use entities::{Bomb, BombPool, Item, ItemKind, ItemPool, Particle, ParticlePool};
pub use player::{InputState, Player};
pub use state::World;
