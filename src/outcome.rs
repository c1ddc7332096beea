use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{deck::Card, hand::is_blackjack};

/// Every round is played for this many chips.
pub const BET: i64 = 100;
/// A natural pays 3:2 on the fixed bet.
pub const BLACKJACK_PAYOUT: i64 = 150;

/// Result of a round; `Pending` goes over the wire as `""`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[default]
    #[serde(rename = "")]
    Pending,
    Win,
    Lose,
    Push,
    Blackjack,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pending => "",
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Push => "push",
            Outcome::Blackjack => "blackjack",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub outcome: Outcome,
    pub chip_change: i64,
}

impl Settlement {
    fn new(outcome: Outcome, chip_change: i64) -> Self {
        Settlement {
            outcome,
            chip_change,
        }
    }
}

/// Settles a finished round. Checks run in a fixed order: naturals first,
/// then a player bust (which loses even if the dealer also busted), then a
/// dealer bust, then the plain comparison.
pub fn resolve(
    player_value: u8,
    dealer_value: u8,
    player_hand: &[Card],
    dealer_hand: &[Card],
) -> Settlement {
    let player_blackjack = is_blackjack(player_hand);
    let dealer_blackjack = is_blackjack(dealer_hand);

    match (player_blackjack, dealer_blackjack) {
        (true, false) => return Settlement::new(Outcome::Blackjack, BLACKJACK_PAYOUT),
        (false, true) => return Settlement::new(Outcome::Lose, -BET),
        (true, true) => return Settlement::new(Outcome::Push, 0),
        (false, false) => {}
    }

    if player_value > 21 {
        Settlement::new(Outcome::Lose, -BET)
    } else if dealer_value > 21 || player_value > dealer_value {
        Settlement::new(Outcome::Win, BET)
    } else if dealer_value > player_value {
        Settlement::new(Outcome::Lose, -BET)
    } else {
        Settlement::new(Outcome::Push, 0)
    }
}
