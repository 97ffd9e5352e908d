//! Session setup: building the initial game state.

pub mod builder;

pub use builder::{GameBuilder, SetupError};
