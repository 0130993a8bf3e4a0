//! Transport-agnostic request/response shapes.
//!
//! Field spelling is camelCase on the wire (`diceValues`, `rollCount`, ...).
//! A network binding can serialize these as-is; callers never recompute
//! scores, the view carries the authoritative ones.

use serde::{Deserialize, Serialize};

use yatzy_core::{Category, GameState, TurnController};

/// One scorecard row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScoreView {
    pub category: Category,
    pub locked: bool,
    /// Locked value if locked, otherwise the potential for the current dice.
    pub score: i32,
}

/// Full game state as returned to a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    pub dice_values: [u8; 5],
    pub roll_count: u8,
    pub rounds_left: u8,
    pub total_score: i32,
    pub game_is_over: bool,
    /// All 13 rows in display order.
    pub scores: Vec<CategoryScoreView>,
}

/// Response of an early game end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalScore {
    pub total_score: i32,
}

impl GameStateView {
    /// Project a controller's state, folding in potential scores.
    pub fn from_controller(ctrl: &TurnController) -> GameStateView {
        let s: &GameState = ctrl.state();
        let potential = ctrl.potential_scores();
        let scores = Category::ALL
            .iter()
            .map(|&cat| CategoryScoreView {
                category: cat,
                locked: s.is_locked(cat),
                score: potential[cat.index()],
            })
            .collect();

        GameStateView {
            dice_values: s.dice,
            roll_count: s.roll_count,
            rounds_left: s.rounds_left,
            total_score: s.total_score,
            game_is_over: s.game_over,
            scores,
        }
    }

    /// Row for one category.
    pub fn row(&self, cat: Category) -> &CategoryScoreView {
        &self.scores[cat.index()]
    }
}
