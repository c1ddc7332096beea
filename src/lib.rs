pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod outcome;
pub mod store;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "wasm")]
mod wasm;

pub use deck::{build_deck, deck_excluding, new_shuffled_deck, shuffle, Card, Rank, Suit};
pub use error::{GameError, StoreError};
pub use game::{apply, deal, hit, new_game, stand, Action, GameState, GameStatus};
pub use hand::{hand_value, is_blackjack};
pub use outcome::{resolve, Outcome, Settlement};
pub use store::GameStore;
