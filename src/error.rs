use thiserror::Error;

use crate::game::{Action, GameStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot {action} while the game is {status}")]
    InvalidState { action: Action, status: GameStatus },
    #[error("unknown action: {0:?}")]
    UnknownAction(String),
    #[error("no card left to deal")]
    DeckExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("game store is unavailable")]
    Unavailable,
    #[error(transparent)]
    Game(#[from] GameError),
}
