//! yatzy-core: categories, scoring, game state, and the turn controller.

pub mod category;
pub mod config;
pub mod controller;
pub mod scoring;
pub mod state;

pub use category::{Category, NUM_CATS};
pub use config::{Config, ConfigError};
pub use controller::{DiceSource, InvalidMove, TurnController, MAX_ROLLS};
pub use scoring::{score_category, scores_for_dice};
pub use state::{GameState, PLACEHOLDER_DICE, TOTAL_ROUNDS};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod controller_tests;
