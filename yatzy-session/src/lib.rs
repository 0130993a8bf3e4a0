//! yatzy-session: many concurrent games behind one registry.
//!
//! Each game is an independently locked `TurnController`; the registry only
//! hands out state views, never raw controllers, so every mutation goes
//! through the rules.

pub mod api;
pub mod registry;

pub use api::{CategoryScoreView, FinalScore, GameStateView};
pub use registry::{GameId, SessionError, SessionRegistry};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod registry_tests;
