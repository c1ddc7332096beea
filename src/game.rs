use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    deck::{deck_excluding, draw, new_shuffled_deck, Card},
    error::GameError,
    hand::{hand_value, is_blackjack, is_bust, reveal},
    outcome::{resolve, Outcome},
};

pub const STARTING_BALANCE: i64 = 1000;
/// The dealer draws below this total and stands on anything at or above it,
/// soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Betting,
    Playing,
    /// Accepted on the wire but never entered: the dealer draws to completion
    /// inside `stand`.
    DealerTurn,
    Finished,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Betting => "betting",
            GameStatus::Playing => "playing",
            GameStatus::DealerTurn => "dealer_turn",
            GameStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    NewGame,
    Hit,
    Stand,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::NewGame => "new_game",
            Action::Hit => "hit",
            Action::Stand => "stand",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new_game" => Ok(Action::NewGame),
            "hit" => Ok(Action::Hit),
            "stand" => Ok(Action::Stand),
            other => Err(GameError::UnknownAction(other.to_string())),
        }
    }
}

/// The whole table. Transitions never edit one in place; each returns a
/// fresh value and leaves its input untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub player_hand: Vec<Card>,
    pub dealer_hand: Vec<Card>,
    pub deck: Vec<Card>,
    pub game_status: GameStatus,
    #[serde(default)]
    pub result: Outcome,
    pub chip_balance: i64,
    pub player_value: u8,
    /// Only face-up dealer cards are counted while the hole card is hidden.
    pub dealer_value: u8,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            player_hand: Vec::new(),
            dealer_hand: Vec::new(),
            deck: Vec::new(),
            game_status: GameStatus::Betting,
            result: Outcome::Pending,
            chip_balance: STARTING_BALANCE,
            player_value: 0,
            dealer_value: 0,
        }
    }
}

pub fn apply<R: Rng + ?Sized>(
    state: &GameState,
    action: Action,
    rng: &mut R,
) -> Result<GameState, GameError> {
    match action {
        Action::NewGame => new_game(state, rng),
        Action::Hit => hit(state, rng),
        Action::Stand => stand(state, rng),
    }
}

pub fn new_game<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Result<GameState, GameError> {
    deal(state, new_shuffled_deck(rng), rng)
}

/// Deals a round from `deck`: two cards to the player, then the dealer's
/// up card and hole card. A natural on either side ends the round at once.
pub fn deal<R: Rng + ?Sized>(
    state: &GameState,
    mut deck: Vec<Card>,
    rng: &mut R,
) -> Result<GameState, GameError> {
    let mut dealt: Vec<Card> = Vec::with_capacity(4);
    for _ in 0..4 {
        let card = draw_card(&mut deck, rng, || dealt.clone())?;
        dealt.push(card.face_up());
    }

    let player_hand = vec![dealt[0], dealt[1]];
    let dealer_hand = vec![dealt[2], dealt[3].face_down()];
    let player_value = hand_value(&player_hand);
    let dealer_full = reveal(&dealer_hand);

    if is_blackjack(&player_hand) || is_blackjack(&dealer_full) {
        debug!(player_value, "natural dealt");
        return Ok(finish(
            state.chip_balance,
            player_hand,
            player_value,
            dealer_full,
            deck,
        ));
    }

    let dealer_value = hand_value(&dealer_hand);
    debug!(player_value, dealer_value, "round dealt");
    Ok(GameState {
        player_hand,
        dealer_hand,
        deck,
        game_status: GameStatus::Playing,
        result: Outcome::Pending,
        chip_balance: state.chip_balance,
        player_value,
        dealer_value,
    })
}

pub fn hit<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Result<GameState, GameError> {
    ensure_playing(state, Action::Hit)?;

    let mut deck = state.deck.clone();
    let card = draw_card(&mut deck, rng, || in_play(&state.player_hand, &state.dealer_hand))?;

    let mut player_hand = state.player_hand.clone();
    player_hand.push(card);
    let player_value = hand_value(&player_hand);
    debug!(%card, player_value, "player hits");

    if is_bust(&player_hand) {
        return Ok(finish(
            state.chip_balance,
            player_hand,
            player_value,
            reveal(&state.dealer_hand),
            deck,
        ));
    }

    Ok(GameState {
        player_hand,
        player_value,
        deck,
        ..state.clone()
    })
}

pub fn stand<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Result<GameState, GameError> {
    ensure_playing(state, Action::Stand)?;

    let mut deck = state.deck.clone();
    let dealer_hand = play_dealer(
        &state.player_hand,
        reveal(&state.dealer_hand),
        &mut deck,
        rng,
    )?;

    Ok(finish(
        state.chip_balance,
        state.player_hand.clone(),
        state.player_value,
        dealer_hand,
        deck,
    ))
}

fn ensure_playing(state: &GameState, action: Action) -> Result<(), GameError> {
    if state.game_status == GameStatus::Playing {
        return Ok(());
    }
    warn!(%action, status = %state.game_status, "action rejected");
    Err(GameError::InvalidState {
        action,
        status: state.game_status,
    })
}

/// Dealer draws until reaching `DEALER_STANDS_ON`.
fn play_dealer<R: Rng + ?Sized>(
    player_hand: &[Card],
    mut hand: Vec<Card>,
    deck: &mut Vec<Card>,
    rng: &mut R,
) -> Result<Vec<Card>, GameError> {
    while hand_value(&hand) < DEALER_STANDS_ON {
        let card = draw_card(deck, rng, || in_play(player_hand, &hand))?;
        hand.push(card);
    }
    debug!(dealer_value = hand_value(&hand), cards = hand.len(), "dealer stands");
    Ok(hand)
}

/// Draws the top card, rebuilding the deck around the cards in play first
/// if it has run out.
fn draw_card<R, F>(deck: &mut Vec<Card>, rng: &mut R, in_play: F) -> Result<Card, GameError>
where
    R: Rng + ?Sized,
    F: FnOnce() -> Vec<Card>,
{
    if deck.is_empty() {
        let excluded = in_play();
        *deck = deck_excluding(&excluded, rng);
        warn!(in_play = excluded.len(), remaining = deck.len(), "deck exhausted, replenished");
    }
    draw(deck).ok_or(GameError::DeckExhausted)
}

fn in_play(player_hand: &[Card], dealer_hand: &[Card]) -> Vec<Card> {
    player_hand.iter().chain(dealer_hand).copied().collect()
}

fn finish(
    chip_balance: i64,
    player_hand: Vec<Card>,
    player_value: u8,
    dealer_hand: Vec<Card>,
    deck: Vec<Card>,
) -> GameState {
    let dealer_value = hand_value(&dealer_hand);
    let settlement = resolve(player_value, dealer_value, &player_hand, &dealer_hand);
    let chip_balance = chip_balance + settlement.chip_change;
    info!(
        result = %settlement.outcome,
        player_value,
        dealer_value,
        chip_change = settlement.chip_change,
        chip_balance,
        "round finished"
    );

    GameState {
        player_hand,
        dealer_hand,
        deck,
        game_status: GameStatus::Finished,
        result: settlement.outcome,
        chip_balance,
        player_value,
        dealer_value,
    }
}
