use std::sync::{Mutex, MutexGuard};

use rand::{rngs::SmallRng, SeedableRng};
use tracing::debug;

use crate::{
    error::StoreError,
    game::{apply, Action, GameState},
};

struct Table {
    state: GameState,
    rng: SmallRng,
}

/// Holds the one live game. Every action runs its read-modify-write under a
/// single lock, so concurrent requests are applied one after another.
pub struct GameStore {
    table: Mutex<Table>,
}

impl GameStore {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::with_state(GameState::default(), rng)
    }

    pub fn with_state(state: GameState, rng: SmallRng) -> Self {
        GameStore {
            table: Mutex::new(Table { state, rng }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, StoreError> {
        self.table.lock().map_err(|_| StoreError::Unavailable)
    }

    pub fn get(&self) -> Result<GameState, StoreError> {
        Ok(self.lock()?.state.clone())
    }

    pub fn set(&self, state: GameState) -> Result<(), StoreError> {
        self.lock()?.state = state;
        Ok(())
    }

    /// Applies `action` to the current state and stores the result. A
    /// rejected action leaves the stored state as it was.
    pub fn apply(&self, action: Action) -> Result<GameState, StoreError> {
        let mut table = self.lock()?;
        let Table { state, rng } = &mut *table;
        let next = apply(state, action, rng)?;
        debug!(%action, status = %next.game_status, "state replaced");
        *state = next.clone();
        Ok(next)
    }
}

impl Default for GameStore {
    fn default() -> Self {
        GameStore::new(None)
    }
}
