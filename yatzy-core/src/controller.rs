//! Turn controller: the single place that mutates `GameState` via rules.
//!
//! All operations are synchronous and re-validate their preconditions here,
//! regardless of what any UI claims. A rejected operation leaves the state
//! untouched.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use thiserror::Error;

use crate::category::{Category, NUM_CATS};
use crate::scoring::{score_category, scores_for_dice};
use crate::state::{GameState, PLACEHOLDER_DICE, TOTAL_ROUNDS};

/// Maximum rolls per round.
pub const MAX_ROLLS: u8 = 3;

/// How new die faces are drawn.
pub enum DiceSource {
    /// Pseudorandom faces backed by a small PRNG.
    Rng { rng: Box<ChaCha8Rng> },
    /// Fixed face sequence, cycled. For deterministic tests.
    Scripted { faces: Vec<u8>, next: usize },
}

impl DiceSource {
    pub fn seeded(seed: u64) -> DiceSource {
        DiceSource::Rng {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> DiceSource {
        DiceSource::Rng {
            rng: Box::new(ChaCha8Rng::from_entropy()),
        }
    }

    /// Faces must be in 1..=6 and non-empty; the sequence repeats once spent.
    pub fn scripted(faces: Vec<u8>) -> DiceSource {
        assert!(!faces.is_empty(), "scripted dice need at least one face");
        assert!(
            faces.iter().all(|f| (1..=6).contains(f)),
            "scripted faces must be in 1..=6"
        );
        DiceSource::Scripted { faces, next: 0 }
    }

    fn next_face(&mut self) -> u8 {
        match self {
            DiceSource::Rng { rng } => rng.gen_range(1..=6),
            DiceSource::Scripted { faces, next } => {
                let f = faces[*next % faces.len()];
                *next += 1;
                f
            }
        }
    }
}

/// A transition attempted outside its precondition. The state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("game is over")]
    GameOver,
    #[error("no rolls left this round")]
    RollsExhausted,
    #[error("category {0} is already locked")]
    CategoryLocked(Category),
    #[error("must roll at least once before scoring")]
    NotYetRolled,
}

/// Owns one game's state and enforces legal transitions.
pub struct TurnController {
    state: GameState,
    dice: DiceSource,
}

impl TurnController {
    pub fn new(dice: DiceSource) -> TurnController {
        TurnController {
            state: GameState::new(),
            dice,
        }
    }

    /// Current state (read-only snapshot; `GameState` is `Copy`).
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Reset to a fresh game. Always succeeds; the dice source is kept.
    pub fn start_game(&mut self) -> GameState {
        self.state = GameState::new();
        self.state
    }

    /// Reroll every die whose index is not kept. Legal up to three times per
    /// round; keeping all five is allowed and still consumes a roll.
    pub fn roll(&mut self, keep: [bool; 5]) -> Result<GameState, InvalidMove> {
        if self.state.game_over {
            return Err(InvalidMove::GameOver);
        }
        if self.state.roll_count >= MAX_ROLLS {
            return Err(InvalidMove::RollsExhausted);
        }

        for (i, kept) in keep.iter().enumerate() {
            if !kept {
                self.state.dice[i] = self.dice.next_face();
            }
        }
        self.state.roll_count += 1;
        Ok(self.state)
    }

    /// Lock `cat` at its score for the current dice. A zero score is a legal,
    /// irreversible lock and consumes the round like any other.
    pub fn select_category(&mut self, cat: Category) -> Result<GameState, InvalidMove> {
        if self.state.game_over {
            return Err(InvalidMove::GameOver);
        }
        if self.state.is_locked(cat) {
            return Err(InvalidMove::CategoryLocked(cat));
        }
        if self.state.roll_count == 0 {
            return Err(InvalidMove::NotYetRolled);
        }

        let score = score_category(self.state.dice, cat);
        self.state.locked[cat.index()] = Some(score);
        self.state.total_score += score;
        self.state.rounds_left -= 1;

        if self.state.rounds_left == 0 {
            self.state.game_over = true;
        } else {
            self.state.roll_count = 0;
            self.state.dice = PLACEHOLDER_DICE;
        }
        Ok(self.state)
    }

    /// End the game early. Idempotent: repeated calls return the same total.
    /// Open categories stay open and contribute nothing to the total.
    pub fn end_game(&mut self) -> i32 {
        self.state.game_over = true;
        self.state.total_score
    }

    /// Per-category projection: locked value where locked, otherwise the score
    /// the current dice would yield. Read-only.
    pub fn potential_scores(&self) -> [i32; NUM_CATS] {
        let fresh = scores_for_dice(self.state.dice);
        let mut out = [0i32; NUM_CATS];
        for cat in Category::ALL {
            let i = cat.index();
            out[i] = self.state.locked[i].unwrap_or(fresh[i]);
        }
        out
    }
}

// Sanity: a full game takes exactly TOTAL_ROUNDS locks.
const _: () = assert!(TOTAL_ROUNDS as usize == NUM_CATS);
