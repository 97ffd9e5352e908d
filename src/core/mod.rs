//! Core engine types: players, RNG, rules, and the game state aggregate.

pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use config::Rules;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Hand};
