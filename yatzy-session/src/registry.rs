//! Game registry: id allocation, per-game locking, seed derivation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;
use thiserror::Error;

use yatzy_core::{Category, DiceSource, InvalidMove, TurnController};

use crate::api::{FinalScore, GameStateView};

/// Opaque per-game identifier.
pub type GameId = u64;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown game id {0}")]
    UnknownGame(GameId),
    #[error(transparent)]
    Move(#[from] InvalidMove),
}

/// Owns all active games. Each game sits behind its own mutex, so operations
/// on one game serialize while different games proceed independently.
pub struct SessionRegistry {
    games: Mutex<FxHashMap<GameId, Arc<Mutex<TurnController>>>>,
    next_id: AtomicU64,
    /// Base seed for per-game dice streams. None = entropy per game.
    base_seed: Option<u64>,
}

impl SessionRegistry {
    pub fn new() -> SessionRegistry {
        SessionRegistry {
            games: Mutex::new(FxHashMap::default()),
            next_id: AtomicU64::new(1),
            base_seed: None,
        }
    }

    /// All games draw dice from streams derived from `seed` and their id.
    pub fn with_seed(seed: u64) -> SessionRegistry {
        SessionRegistry {
            games: Mutex::new(FxHashMap::default()),
            next_id: AtomicU64::new(1),
            base_seed: Some(seed),
        }
    }

    fn dice_for_game(&self, id: GameId) -> DiceSource {
        match self.base_seed {
            Some(base) => {
                // Splitmix-style mixing keeps per-game streams decorrelated.
                let s = base ^ id.wrapping_mul(0x9E37_79B9_7F4A_7C15);
                DiceSource::seeded(s)
            }
            None => DiceSource::from_entropy(),
        }
    }

    fn game(&self, id: GameId) -> Result<Arc<Mutex<TurnController>>, SessionError> {
        let games = self.games.lock().expect("registry mutex poisoned");
        games.get(&id).cloned().ok_or(SessionError::UnknownGame(id))
    }

    /// Create a new game, returning its id and initial state.
    pub fn start_game(&self) -> (GameId, GameStateView) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let ctrl = TurnController::new(self.dice_for_game(id));
        let view = GameStateView::from_controller(&ctrl);
        self.games
            .lock()
            .expect("registry mutex poisoned")
            .insert(id, Arc::new(Mutex::new(ctrl)));
        (id, view)
    }

    /// Reroll the unkept dice of game `id`.
    pub fn roll(&self, id: GameId, keep: [bool; 5]) -> Result<GameStateView, SessionError> {
        let game = self.game(id)?;
        let mut ctrl = game.lock().expect("game mutex poisoned");
        ctrl.roll(keep)?;
        Ok(GameStateView::from_controller(&ctrl))
    }

    /// Lock a category of game `id`.
    pub fn select_category(
        &self,
        id: GameId,
        cat: Category,
    ) -> Result<GameStateView, SessionError> {
        let game = self.game(id)?;
        let mut ctrl = game.lock().expect("game mutex poisoned");
        ctrl.select_category(cat)?;
        Ok(GameStateView::from_controller(&ctrl))
    }

    /// End game `id` early. Idempotent per game.
    pub fn end_game(&self, id: GameId) -> Result<FinalScore, SessionError> {
        let game = self.game(id)?;
        let mut ctrl = game.lock().expect("game mutex poisoned");
        let total_score = ctrl.end_game();
        Ok(FinalScore { total_score })
    }

    /// Read-only state projection of game `id`.
    pub fn state(&self, id: GameId) -> Result<GameStateView, SessionError> {
        let game = self.game(id)?;
        let ctrl = game.lock().expect("game mutex poisoned");
        Ok(GameStateView::from_controller(&ctrl))
    }

    /// Drop a finished (or abandoned) game.
    pub fn remove(&self, id: GameId) -> Result<(), SessionError> {
        let mut games = self.games.lock().expect("registry mutex poisoned");
        games.remove(&id).ok_or(SessionError::UnknownGame(id))?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.games.lock().expect("registry mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        SessionRegistry::new()
    }
}
