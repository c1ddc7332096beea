use std::collections::HashSet;
use std::fmt;

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 52;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// A single playing card. Only `hidden` changes after the card is dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card {
            suit,
            rank,
            hidden: false,
        }
    }

    pub fn face_down(self) -> Self {
        Card {
            hidden: true,
            ..self
        }
    }

    pub fn face_up(self) -> Self {
        Card {
            hidden: false,
            ..self
        }
    }

    /// Identity of the physical card, ignoring whether it is face down.
    pub fn key(&self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hidden {
            return write!(f, "??");
        }
        let suit = match self.suit {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        };
        write!(f, "{}{}", self.rank.symbol(), suit)
    }
}

/// All 52 cards, suits outer and ranks inner, in declaration order.
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Returns a shuffled copy; the input is left untouched.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    // Fisher-Yates from the last index down, j drawn from 0..=i.
    shuffled.shuffle(rng);
    shuffled
}

pub fn new_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    shuffle(&build_deck(), rng)
}

/// A freshly shuffled deck minus every card already in play.
///
/// Used when the live deck runs dry mid-round. The remaining pool is
/// reshuffled from scratch rather than continued from the exhausted deck,
/// so draw order after a replenishment is independent of the cards that
/// were left before it.
pub fn deck_excluding<R: Rng + ?Sized>(in_play: &[Card], rng: &mut R) -> Vec<Card> {
    let excluded: HashSet<(Rank, Suit)> = in_play.iter().map(Card::key).collect();
    new_shuffled_deck(rng)
        .into_iter()
        .filter(|card| !excluded.contains(&card.key()))
        .collect()
}

/// Takes the top card (the end of the sequence).
pub fn draw(deck: &mut Vec<Card>) -> Option<Card> {
    deck.pop()
}
