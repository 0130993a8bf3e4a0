//! Game state for a single solo game.

use crate::category::{Category, NUM_CATS};

/// Rounds in a full game: one lock per category.
pub const TOTAL_ROUNDS: u8 = NUM_CATS as u8;

/// Dice shown before the first roll of a round (game start and after each
/// lock). All sixes; never scoreable because `roll_count == 0` blocks
/// category selection.
pub const PLACEHOLDER_DICE: [u8; 5] = [6; 5];

/// Full state of one game.
///
/// Invariants (checked by tests, maintained by `TurnController`):
/// - `total_score` equals the sum of all locked values
/// - `rounds_left == 13 - number of locked categories`
/// - `rounds_left == 0` iff every category is locked, and then `game_over`
/// - `roll_count` is 0..=3 and resets to 0 on a fresh lock or new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    /// Current dice, order preserved (rerolls are per index).
    pub dice: [u8; 5],
    /// Rolls taken this round, 0..=3.
    pub roll_count: u8,
    /// Rounds (locks) remaining, 0..=13.
    pub rounds_left: u8,
    /// Locked score per category, display order. `None` = still open.
    pub locked: [Option<i32>; NUM_CATS],
    /// Sum of all locked scores.
    pub total_score: i32,
    /// Terminal flag: no further rolls or locks once set.
    pub game_over: bool,
}

impl GameState {
    /// Fresh game: nothing rolled, nothing locked.
    pub fn new() -> GameState {
        GameState {
            dice: PLACEHOLDER_DICE,
            roll_count: 0,
            rounds_left: TOTAL_ROUNDS,
            locked: [None; NUM_CATS],
            total_score: 0,
            game_over: false,
        }
    }

    #[inline]
    pub fn is_locked(&self, cat: Category) -> bool {
        self.locked[cat.index()].is_some()
    }

    /// Sum of locked values. Equal to `total_score` by invariant.
    pub fn locked_total(&self) -> i32 {
        self.locked.iter().flatten().sum()
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
